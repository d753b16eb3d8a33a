// Correction Report - per-queue outcomes of one pass

use crate::domain::QueueId;
use crate::port::ApiError;

/// What happened to one queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOutcome {
    /// Flag was not strictly `false`; nothing sent
    AlreadyEditable,
    /// Update accepted by the platform
    Corrected,
    /// Dry run: an update would have been sent
    WouldCorrect,
    /// Detail fetch failed; no update attempted
    FetchFailed(ApiError),
    /// Detail fetched, update rejected
    UpdateFailed(ApiError),
}

impl QueueOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            QueueOutcome::FetchFailed(_) | QueueOutcome::UpdateFailed(_)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueueOutcome::AlreadyEditable => "unchanged",
            QueueOutcome::Corrected => "corrected",
            QueueOutcome::WouldCorrect => "would correct",
            QueueOutcome::FetchFailed(_) => "fetch failed",
            QueueOutcome::UpdateFailed(_) => "update failed",
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            QueueOutcome::FetchFailed(e) | QueueOutcome::UpdateFailed(e) => Some(e),
            _ => None,
        }
    }
}

/// Outcome for a single listed queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueReport {
    pub id: QueueId,
    pub outcome: QueueOutcome,
}

/// Aggregated result of `QueueCorrector::correct_all`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionReport {
    /// Set when the listing call itself failed (no queues were visited)
    pub listing_error: Option<ApiError>,
    /// One entry per listed queue, in listing order
    pub queues: Vec<QueueReport>,
}

impl CorrectionReport {
    pub fn listing_failed(error: ApiError) -> Self {
        Self {
            listing_error: Some(error),
            queues: Vec::new(),
        }
    }

    pub fn push(&mut self, id: impl Into<QueueId>, outcome: QueueOutcome) {
        self.queues.push(QueueReport {
            id: id.into(),
            outcome,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    pub fn corrected_count(&self) -> usize {
        self.count(|o| matches!(o, QueueOutcome::Corrected | QueueOutcome::WouldCorrect))
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(|o| matches!(o, QueueOutcome::AlreadyEditable))
    }

    /// Failed queues plus one for a failed listing
    pub fn failure_count(&self) -> usize {
        self.count(QueueOutcome::is_failure) + usize::from(self.listing_error.is_some())
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    fn count(&self, pred: impl Fn(&QueueOutcome) -> bool) -> usize {
        self.queues.iter().filter(|q| pred(&q.outcome)).count()
    }
}
