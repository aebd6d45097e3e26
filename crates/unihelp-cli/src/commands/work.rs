//! Accept, complete, and rate work
//!
//! Every mutating command checks the lifecycle gate against a fresh record
//! first, and refetches the record afterwards so the printed state is the
//! server's, not an optimistic local guess.

use crate::cli::{CompleteArgs, RateArgs, ShowArgs};
use crate::commands::list::status_label;
use crate::output::OutputWriter;
use anyhow::{bail, Result};
use unihelp_client::UniHelpClient;
use unihelp_core::lifecycle::{can_complete, can_rate, can_transition_to_in_progress, StartIntent};
use unihelp_core::models::RequestId;

pub async fn accept(args: ShowArgs, client: &UniHelpClient, output: &OutputWriter) -> Result<()> {
    let id = RequestId(args.id);
    let record = client.get_request(id).await?;

    if !can_transition_to_in_progress(&record, StartIntent::AcceptWork) {
        bail!(
            "Request {} cannot be accepted (status: {})",
            args.id,
            status_label(record.processing_status)
        );
    }

    client.accept_work(id).await?;
    let fresh = client.get_request(id).await?;
    output.success(format!(
        "Accepted request {} (status now: {})",
        args.id,
        status_label(fresh.processing_status)
    ));
    Ok(())
}

pub async fn complete(
    args: CompleteArgs,
    client: &UniHelpClient,
    output: &OutputWriter,
) -> Result<()> {
    let id = RequestId(args.id);
    let record = client.get_request(id).await?;

    if !can_complete(&record, record.is_worker, &args.report) {
        bail!(
            "Request {} cannot be completed: you must be its worker, it must be in progress, \
             and the report must not be empty",
            args.id
        );
    }

    client.complete_work(id, &args.report).await?;
    let fresh = client.get_request(id).await?;
    output.success(format!(
        "Completion report submitted for request {} (status now: {})",
        args.id,
        status_label(fresh.processing_status)
    ));
    Ok(())
}

pub async fn rate(args: RateArgs, client: &UniHelpClient, output: &OutputWriter) -> Result<()> {
    let id = RequestId(args.id);
    let record = client.get_request(id).await?;

    if !can_rate(&record) {
        bail!(
            "Request {} cannot be rated: you must own it and a completion report must be present",
            args.id
        );
    }

    client.rate_work(id, args.rate).await?;
    output.success(format!("Rated request {} with {}", args.id, args.rate));
    Ok(())
}
