// Queue Corrector - fetch, check, mutate over the call-queue collection

mod report;

pub use report::{CorrectionReport, QueueOutcome, QueueReport};

use crate::domain::{QueueUpdate, Session};
use crate::port::QueueApi;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Whether corrective updates are actually sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionMode {
    #[default]
    Apply,
    DryRun,
}

/// Queue Corrector
///
/// Walks every listed queue one at a time and enables `editableMemberStatus`
/// where it is explicitly disabled. Each remote failure is logged once and
/// recorded in the report; none of them stop the pass.
pub struct QueueCorrector {
    api: Arc<dyn QueueApi>,
    mode: CorrectionMode,
}

impl QueueCorrector {
    pub fn new(api: Arc<dyn QueueApi>, mode: CorrectionMode) -> Self {
        Self { api, mode }
    }

    pub fn mode(&self) -> CorrectionMode {
        self.mode
    }

    /// Correct every queue visible to the session
    pub async fn correct_all(&self, session: &Session) -> CorrectionReport {
        let summaries = match self.api.list_queues(session).await {
            Ok(summaries) => summaries,
            Err(e) => {
                error!(error = %e, kind = e.kind(), "Failed to list call queues");
                return CorrectionReport::listing_failed(e);
            }
        };

        info!(count = summaries.len(), mode = ?self.mode, "Checking call queues");

        let mut report = CorrectionReport::default();
        for summary in &summaries {
            let outcome = self.correct_one(session, &summary.id).await;
            report.push(summary.id.clone(), outcome);
        }

        info!(
            corrected = report.corrected_count(),
            unchanged = report.unchanged_count(),
            failed = report.failure_count(),
            "Call queue pass finished"
        );

        report
    }

    async fn correct_one(&self, session: &Session, id: &str) -> QueueOutcome {
        let config = match self.api.get_queue(session, id).await {
            Ok(config) => config,
            Err(e) => {
                error!(queue_id = %id, error = %e, kind = e.kind(), "Failed to fetch call queue");
                return QueueOutcome::FetchFailed(e);
            }
        };

        if config.id != id {
            warn!(
                queue_id = %id,
                returned_id = %config.id,
                "Call queue detail returned a different id; using the requested one"
            );
        }

        if !config.needs_correction() {
            debug!(queue_id = %id, "editableMemberStatus already enabled");
            return QueueOutcome::AlreadyEditable;
        }

        if self.mode == CorrectionMode::DryRun {
            info!(queue_id = %id, "Dry run: would enable editableMemberStatus");
            return QueueOutcome::WouldCorrect;
        }

        let update = QueueUpdate::enable_editable_member_status();
        match self.api.update_queue(session, id, &update).await {
            Ok(_) => {
                info!(queue_id = %id, "Enabled editableMemberStatus");
                QueueOutcome::Corrected
            }
            Err(e) => {
                error!(queue_id = %id, error = %e, kind = e.kind(), "Failed to update call queue");
                QueueOutcome::UpdateFailed(e)
            }
        }
    }
}
