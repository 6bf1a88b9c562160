//! Dashboard state: the classified set, the active view filter, and the
//! displayed subset derived from them.
//!
//! No entity is mutated in place after construction. The full set is
//! replaced wholesale when an acquisition cycle completes, the displayed
//! subset is recomputed synchronously on every full-set or filter change,
//! and a monotonically increasing request token makes cycle completion
//! last-request-wins: a stale cycle's result is discarded rather than
//! applied over a newer request's.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::models::{AcquisitionStatus, SentimentFilter};
use crate::sentiment::ClassifiedArticle;

/// How long the presentation adapter should keep the status notice up.
const STATUS_NOTICE_SECS: i64 = 3;

/// Derive the displayed subset of a classified set.
///
/// `All` returns the full set unchanged; any other filter returns the
/// order-preserving subsequence with that verdict. Pure and total; an
/// empty result is a valid output.
pub fn apply_filter(
    full_set: &[ClassifiedArticle],
    filter: SentimentFilter,
) -> Vec<ClassifiedArticle> {
    full_set
        .iter()
        .filter(|article| filter.matches(article.sentiment()))
        .cloned()
        .collect()
}

/// Identifies one acquisition cycle. Tokens only increase; comparing a
/// completion's token against the latest issued one detects staleness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Status signal plus the deadline until which the presentation adapter
/// should show it. The adapter owns the timer; this is just a value.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusNotice {
    pub status: AcquisitionStatus,
    pub display_until: DateTime<Utc>,
}

impl StatusNotice {
    fn new(status: AcquisitionStatus) -> Self {
        Self {
            status,
            display_until: Utc::now() + Duration::seconds(STATUS_NOTICE_SECS),
        }
    }
}

/// The single owner of dashboard state across acquisition boundaries.
///
/// The controller holds one `Dashboard` and applies whole-value
/// transitions; components never share mutable state with it.
#[derive(Debug, Default)]
pub struct Dashboard {
    full_set: Vec<ClassifiedArticle>,
    active_filter: SentimentFilter,
    displayed: Vec<ClassifiedArticle>,
    notice: Option<StatusNotice>,
    latest_request: u64,
}

impl Dashboard {
    pub fn new(filter: SentimentFilter) -> Self {
        Dashboard {
            active_filter: filter,
            ..Dashboard::default()
        }
    }

    /// Start an acquisition cycle, invalidating any still-outstanding one.
    pub fn begin_cycle(&mut self) -> RequestToken {
        self.latest_request += 1;
        RequestToken(self.latest_request)
    }

    /// Apply a completed cycle's result. Returns `false` (and changes
    /// nothing) when a newer cycle has been started since `token` was
    /// issued.
    pub fn complete_cycle(
        &mut self,
        token: RequestToken,
        full_set: Vec<ClassifiedArticle>,
        status: AcquisitionStatus,
    ) -> bool {
        if token.0 != self.latest_request {
            debug!(
                stale = token.0,
                latest = self.latest_request,
                "discarding stale acquisition result"
            );
            return false;
        }
        self.full_set = full_set;
        self.notice = Some(StatusNotice::new(status));
        self.refresh();
        true
    }

    /// Change the active filter and recompute the displayed subset.
    pub fn set_filter(&mut self, filter: SentimentFilter) {
        self.active_filter = filter;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.displayed = apply_filter(&self.full_set, self.active_filter);
    }

    pub fn full_set(&self) -> &[ClassifiedArticle] {
        &self.full_set
    }

    pub fn displayed(&self) -> &[ClassifiedArticle] {
        &self.displayed
    }

    pub fn active_filter(&self) -> SentimentFilter {
        self.active_filter
    }

    pub fn notice(&self) -> Option<&StatusNotice> {
        self.notice.as_ref()
    }
}
