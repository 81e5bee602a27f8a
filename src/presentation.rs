//! Formatting and output of the overtime balance.
//!
//! Minutes are shown as `H:MM`. Hours are not padded and can exceed 24.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

/// Label used for the overtime balance.
pub const OVERTIME_LABEL: &str = "Overtime to date";

/// Whether positive values get an explicit sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignStyle {
    /// Only negative values are signed.
    #[default]
    NegativeOnly,
    /// Positive values are prefixed with `+`.
    Always,
}

/// Formats a minute count as `H:MM`.
///
/// # Examples
///
/// ```
/// use overtime_engine::presentation::{format_minutes, SignStyle};
///
/// assert_eq!(format_minutes(0, SignStyle::NegativeOnly), "0:00");
/// assert_eq!(format_minutes(75, SignStyle::NegativeOnly), "1:15");
/// assert_eq!(format_minutes(-60, SignStyle::NegativeOnly), "-1:00");
/// assert_eq!(format_minutes(605, SignStyle::Always), "+10:05");
/// ```
pub fn format_minutes(minutes: i64, style: SignStyle) -> String {
    let sign = match (minutes.signum(), style) {
        (-1, _) => "-",
        (1, SignStyle::Always) => "+",
        _ => "",
    };
    let abs = minutes.unsigned_abs();
    format!("{}{}:{:02}", sign, abs / 60, abs % 60)
}

/// A named value ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    /// The label.
    pub name: String,
    /// The formatted value.
    pub value: String,
}

impl SummaryItem {
    /// The overtime balance item.
    pub fn overtime(minutes: i64, style: SignStyle) -> Self {
        Self {
            name: OVERTIME_LABEL.to_string(),
            value: format_minutes(minutes, style),
        }
    }
}

/// Writes summary items somewhere the user will see them.
pub trait Presenter {
    /// Shows one item.
    ///
    /// Whether a later item replaces an earlier one is up to the sink; a
    /// [`WriterPresenter`] appends a new line each time.
    fn present(&mut self, item: &SummaryItem) -> EngineResult<()>;
}

/// Writes `name: value` lines to any [`Write`] sink, one line per item.
#[derive(Debug)]
pub struct WriterPresenter<W: Write> {
    out: W,
}

impl<W: Write> WriterPresenter<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for WriterPresenter<W> {
    fn present(&mut self, item: &SummaryItem) -> EngineResult<()> {
        writeln!(self.out, "{}: {}", item.name, item.value)?;
        self.out.flush()?;
        Ok(())
    }
}
