//! HTTP client for the attendance service.

use reqwest::header::COOKIE;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::SourceConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceReport, Items};

use super::AttendanceSource;

/// Reads reports and records from the attendance service's JSON API.
///
/// - `GET {base_url}/reports?periodId={default_period_id}&userKey={user_id}`
/// - `GET {base_url}/records/{user_id}?periodId={period_id}`
#[derive(Debug, Clone)]
pub struct HttpAttendanceSource {
    client: reqwest::Client,
    base_url: String,
    user_id: String,
    default_period_id: u64,
    cookie: Option<String>,
}

impl HttpAttendanceSource {
    /// Creates a source for the given service settings.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_id: config.user_id.clone(),
            default_period_id: config.default_period_id,
            cookie: config.cookie.clone(),
        }
    }

    /// The base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> EngineResult<T> {
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self.client.get(&url).query(query);
        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie);
        }

        info!(url = %url, "Requesting attendance data");
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EngineError::SourceStatus {
                status: status.as_u16(),
                url,
                body,
            });
        }

        Ok(resp.json().await?)
    }
}

impl AttendanceSource for HttpAttendanceSource {
    async fn list_periods(&self) -> EngineResult<Vec<AttendanceReport>> {
        let reports: Items<AttendanceReport> = self
            .get(
                "reports",
                &[
                    ("periodId", self.default_period_id.to_string()),
                    ("userKey", self.user_id.clone()),
                ],
            )
            .await?;
        info!(count = reports.items.len(), "Listed reporting periods");
        Ok(reports.into_inner())
    }

    async fn list_records(&self, period_id: u64) -> EngineResult<Vec<AttendanceRecord>> {
        let records: Items<AttendanceRecord> = self
            .get(
                &format!("records/{}", self.user_id),
                &[("periodId", period_id.to_string())],
            )
            .await?;
        info!(period_id, count = records.items.len(), "Listed attendance records");
        Ok(records.into_inner())
    }
}
