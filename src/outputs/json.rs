//! JSON snapshot output for the presentation adapter.
//!
//! Serializes the displayed classified set plus the acquisition status
//! notice. Files are organized by date, one file per category:
//! `{json_output_dir}/{date}/{category}.json`.

use chrono::Local;
use serde::Serialize;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

use crate::models::{AcquisitionStatus, Category};
use crate::sentiment::ClassifiedArticle;
use crate::state::Dashboard;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    category: Category,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<SnapshotStatus<'a>>,
    articles: &'a [ClassifiedArticle],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotStatus<'a> {
    #[serde(flatten)]
    status: &'a AcquisitionStatus,
    display_until: String,
}

/// Write the dashboard's displayed set as a dated JSON snapshot.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir, category = %category))]
pub async fn write_snapshot(
    dashboard: &Dashboard,
    category: Category,
    json_output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let snapshot = Snapshot {
        category,
        generated_at: Local::now().to_rfc3339(),
        status: dashboard.notice().map(|notice| SnapshotStatus {
            status: &notice.status,
            display_until: notice.display_until.to_rfc3339(),
        }),
        articles: dashboard.displayed(),
    };
    let json = serde_json::to_string(&snapshot)?;

    let dated_dir = format!(
        "{}/{}",
        json_output_dir,
        Local::now().date_naive()
    );
    fs::create_dir_all(&dated_dir).await?;

    let path = format!("{}/{}.json", dated_dir, category.slug());
    fs::write(&path, json).await?;
    info!(path = %path, count = dashboard.displayed().len(), "Wrote snapshot");

    Ok(())
}
