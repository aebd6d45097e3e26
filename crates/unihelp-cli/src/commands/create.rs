use crate::cli::CreateArgs;
use crate::output::OutputWriter;
use anyhow::{bail, Result};
use unihelp_client::UniHelpClient;
use unihelp_core::models::{CreateRequest, RequestCategory};

fn parse_category(s: &str) -> Result<RequestCategory> {
    match s.to_lowercase().as_str() {
        "info" => Ok(RequestCategory::Info),
        "help" => Ok(RequestCategory::Help),
        other => bail!("Unknown category '{}': expected info or help", other),
    }
}

pub async fn execute(args: CreateArgs, client: &UniHelpClient, output: &OutputWriter) -> Result<()> {
    if args.reward == 0 {
        bail!("Reward must be a positive amount");
    }

    let payload = CreateRequest {
        title: args.title,
        content: args.content,
        category: parse_category(&args.category)?,
        allow_group_funding: args.group_funding,
        latitude: args.latitude,
        longitude: args.longitude,
        remaining_time: args.remaining_minutes,
        reward: args.reward,
    };

    let record = client.create_request(&payload).await?;
    output.success(format!("Created request {}", record.id));
    if output.is_json() {
        output.result(&record)?;
    }
    Ok(())
}
