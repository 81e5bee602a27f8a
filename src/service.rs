//! End-to-end overtime lookup.
//!
//! Resolves the reporting period, fetches its records, evaluates them against
//! the clock and hands the balance to a presenter. When no period can be
//! resolved there is simply no figure to show.

use tracing::{info, warn};

use crate::calculation::OvertimeAggregator;
use crate::clock::Clock;
use crate::error::EngineResult;
use crate::models::OvertimeSummary;
use crate::presentation::{Presenter, SignStyle, SummaryItem};
use crate::source::AttendanceSource;

/// Ties a source, a clock and an aggregator together.
pub struct OvertimeService<S, C> {
    source: S,
    clock: C,
    aggregator: OvertimeAggregator,
}

impl<S: AttendanceSource, C: Clock> OvertimeService<S, C> {
    /// Creates a service.
    pub fn new(source: S, clock: C, aggregator: OvertimeAggregator) -> Self {
        Self {
            source,
            clock,
            aggregator,
        }
    }

    /// The period to evaluate: `explicit` if given, otherwise the first
    /// period the source lists.
    pub async fn resolve_period(&self, explicit: Option<u64>) -> EngineResult<Option<u64>> {
        if explicit.is_some() {
            return Ok(explicit);
        }
        let periods = self.source.list_periods().await?;
        Ok(periods.first().map(|report| report.period_id))
    }

    /// Computes the overtime summary for a period as of the clock's now.
    ///
    /// Returns `None` when no period could be resolved.
    pub async fn overtime(&self, explicit: Option<u64>) -> EngineResult<Option<OvertimeSummary>> {
        let Some(period_id) = self.resolve_period(explicit).await? else {
            warn!("No reporting period available");
            return Ok(None);
        };

        let records = self.source.list_records(period_id).await?;
        let now = self.clock.now();
        info!(period_id, records = records.len(), now = %now, "Evaluating period");

        Ok(Some(self.aggregator.summarize(&records, now)))
    }

    /// Computes the balance and shows it. Returns the summary that was shown.
    pub async fn report<P: Presenter>(
        &self,
        explicit: Option<u64>,
        presenter: &mut P,
        style: SignStyle,
    ) -> EngineResult<Option<OvertimeSummary>> {
        let summary = self.overtime(explicit).await?;
        if let Some(summary) = &summary {
            presenter.present(&SummaryItem::overtime(summary.overtime_minutes, style))?;
        }
        Ok(summary)
    }
}
