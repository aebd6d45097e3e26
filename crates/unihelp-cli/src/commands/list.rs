use crate::cli::ListArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;
use unihelp_client::UniHelpClient;
use unihelp_core::config::LayeredConfig;
use unihelp_core::models::{Page, ProcessingStatus, RequestRecord};
use unihelp_geo::{format_distance, rank_by_distance, RankedRequest};

/// Table row for a (possibly distance-annotated) request
#[derive(Tabled, Serialize)]
pub struct RequestRow {
    pub id: u64,
    pub title: String,
    pub status: &'static str,
    pub reward: u64,
    pub participants: u32,
    pub distance: String,
}

impl From<&RankedRequest> for RequestRow {
    fn from(ranked: &RankedRequest) -> Self {
        let record = &ranked.record;
        Self {
            id: record.id.0,
            title: record.title.clone(),
            status: status_label(record.processing_status),
            reward: record.reward,
            participants: record.current_participants,
            distance: ranked
                .distance_meters
                .map(format_distance)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn status_label(status: ProcessingStatus) -> &'static str {
    match status {
        ProcessingStatus::NotStarted => "waiting",
        ProcessingStatus::InProgress => "in progress",
        ProcessingStatus::Completed => "completed",
    }
}

pub async fn execute(
    args: ListArgs,
    client: &UniHelpClient,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let size = args.size.unwrap_or(config.page_size.value);
    let page = client.list_requests(args.page, size).await?;
    render_page(page, config, output);
    Ok(())
}

/// Rank a fetched page against the configured origin and print it
pub fn render_page(page: Page<RequestRecord>, config: &LayeredConfig, output: &OutputWriter) {
    let origin = config.origin.value;
    if origin.is_none() {
        output.info("No origin configured; showing server order (set --lat/--lon to rank)");
    }

    let ranked = rank_by_distance(origin.as_ref(), page.content);
    let rows: Vec<RequestRow> = ranked.iter().map(RequestRow::from).collect();
    output.table(rows);
    output.kv(
        "page",
        format!("{} of {} ({} total)", page.page + 1, page.total_pages, page.total_elements),
    );
}
