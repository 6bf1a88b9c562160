//! The acquisition cascade: ordered attempts with early return, and the
//! guaranteed-fallback wrapper around it.

use tracing::{info, instrument, warn};

use crate::error::{AcquisitionError, SourceError};
use crate::models::{AcquisitionStatus, Article, Category};
use crate::sources::SourceDescriptor;
use crate::sources::client::FeedClient;
use crate::sources::fallback;

/// A successful cascade run: the winning source and its items.
#[derive(Debug)]
pub struct CascadeHit {
    pub source: String,
    pub items: Vec<Article>,
}

/// Walk `sources` in order through `attempt`, returning the first source
/// that yields at least one item. Results are never merged across
/// sources; sources after the winner are never attempted.
///
/// Per-source failures are logged and swallowed here; only total
/// exhaustion surfaces, carrying the last error.
pub(crate) async fn run_cascade<F>(
    sources: &[SourceDescriptor],
    category: Category,
    mut attempt: F,
) -> Result<CascadeHit, AcquisitionError>
where
    F: AsyncFnMut(&SourceDescriptor) -> Result<Vec<Article>, SourceError>,
{
    let mut last_error: Option<SourceError> = None;

    for source in sources {
        match attempt(source).await {
            Ok(items) if !items.is_empty() => {
                info!(
                    source = %source.name,
                    count = items.len(),
                    "Source yielded items; cascade complete"
                );
                return Ok(CascadeHit {
                    source: source.name.clone(),
                    items,
                });
            }
            Ok(_) => {
                warn!(source = %source.name, "Source yielded zero items; advancing");
                last_error = Some(SourceError::Malformed(format!(
                    "{} yielded zero items",
                    source.name
                )));
            }
            Err(e) => {
                warn!(source = %source.name, error = %e, "Source attempt failed; advancing");
                last_error = Some(e);
            }
        }
    }

    Err(AcquisitionError {
        category,
        attempted: sources.len(),
        last: last_error
            .unwrap_or_else(|| SourceError::Malformed("no sources configured".to_string())),
    })
}

/// Acquire articles for a category from its source cascade.
#[instrument(level = "info", skip_all, fields(category = %category))]
pub async fn acquire(
    client: &FeedClient,
    category: Category,
    sources: &[SourceDescriptor],
) -> Result<CascadeHit, AcquisitionError> {
    run_cascade(sources, category, async |source| {
        client.attempt(source).await
    })
    .await
}

/// Acquire with the guaranteed fallback: on exhaustion, substitute the
/// fixed built-in set for the category. Always returns a non-empty set;
/// the error itself never escapes, only the status signal does.
pub async fn acquire_or_fallback(
    client: &FeedClient,
    category: Category,
    sources: &[SourceDescriptor],
) -> (Vec<Article>, AcquisitionStatus) {
    match acquire(client, category, sources).await {
        Ok(hit) => {
            let status = AcquisitionStatus::Live {
                source: hit.source,
            };
            (hit.items, status)
        }
        Err(e) => {
            warn!(error = %e, "Every source failed; substituting built-in articles");
            (fallback::articles_for(category), AcquisitionStatus::Fallback)
        }
    }
}
