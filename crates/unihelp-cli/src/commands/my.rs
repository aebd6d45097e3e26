use crate::cli::{ListArgs, WithdrawPointArgs};
use crate::commands::list::render_page;
use crate::output::OutputWriter;
use anyhow::Result;
use unihelp_client::UniHelpClient;
use unihelp_core::config::LayeredConfig;

pub async fn requests(
    args: ListArgs,
    client: &UniHelpClient,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let size = args.size.unwrap_or(config.page_size.value);
    let page = client.my_requests(args.page, size).await?;
    render_page(page, config, output);
    Ok(())
}

pub async fn works(
    args: ListArgs,
    client: &UniHelpClient,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let size = args.size.unwrap_or(config.page_size.value);
    let page = client.my_works(args.page, size).await?;
    render_page(page, config, output);
    Ok(())
}

pub async fn fundings(
    args: ListArgs,
    client: &UniHelpClient,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let size = args.size.unwrap_or(config.page_size.value);
    let page = client.my_fundings(args.page, size).await?;
    render_page(page, config, output);
    Ok(())
}

pub async fn point(client: &UniHelpClient, output: &OutputWriter) -> Result<()> {
    let balance = client.point_balance().await?;
    if output.is_json() {
        output.result(&balance)?;
    } else {
        output.kv("points", balance.point);
    }
    Ok(())
}

pub async fn withdraw_point(
    args: WithdrawPointArgs,
    client: &UniHelpClient,
    output: &OutputWriter,
) -> Result<()> {
    client.withdraw_point(args.point).await?;
    let balance = client.point_balance().await?;
    output.success(format!(
        "Withdrew {} points (balance now: {})",
        args.point, balance.point
    ));
    Ok(())
}
