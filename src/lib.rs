//! Overtime Engine
//!
//! This crate computes a running overtime balance from daily attendance
//! records: scheduled minutes against minutes actually worked, with leave
//! counted as worked time and a live estimate for a day that has not been
//! checked out yet.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod service;
pub mod source;
