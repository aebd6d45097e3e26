use crate::cli::ShowArgs;
use crate::commands::list::status_label;
use crate::output::OutputWriter;
use anyhow::Result;
use unihelp_client::UniHelpClient;
use unihelp_core::config::LayeredConfig;
use unihelp_core::lifecycle::{allowed_actions, per_participant_share, Action};
use unihelp_core::models::RequestId;
use unihelp_geo::{distance_meters, format_distance};

fn action_label(action: Action) -> &'static str {
    match action {
        Action::Edit => "edit",
        Action::Delete => "delete",
        Action::AcceptWork => "accept",
        Action::JoinFunding => "fund join",
        Action::WithdrawFunding => "fund withdraw",
        Action::SubmitCompletion => "complete",
        Action::Rate => "rate",
    }
}

pub async fn execute(
    args: ShowArgs,
    client: &UniHelpClient,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let record = client.get_request(RequestId(args.id)).await?;

    if output.is_json() {
        output.result(&record)?;
        return Ok(());
    }

    output.section(&record.title);
    output.kv("author", format!("{} ({})", record.writer, record.college));
    output.kv("status", status_label(record.processing_status));
    output.kv("reward", record.reward);
    if record.allow_group_funding {
        output.kv("participants", record.current_participants);
        output.kv("per-participant share", per_participant_share(&record));
    }
    if let Some(origin) = &config.origin.value {
        let d = distance_meters(Some(origin), Some(&record.coordinate));
        output.kv("distance", format_distance(d));
    }
    if let Some(report) = &record.finish_content {
        output.kv("completion report", report);
    }
    output.kv("content", &record.content);

    let actions: Vec<&str> = allowed_actions(&record)
        .into_iter()
        .map(action_label)
        .collect();
    if actions.is_empty() {
        output.kv("available actions", "(view only)");
    } else {
        output.kv("available actions", actions.join(", "));
    }

    Ok(())
}

pub async fn delete(args: ShowArgs, client: &UniHelpClient, output: &OutputWriter) -> Result<()> {
    client.delete_request(RequestId(args.id)).await?;
    output.success(format!("Request {} deleted", args.id));
    Ok(())
}
