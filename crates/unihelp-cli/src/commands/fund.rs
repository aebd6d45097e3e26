use crate::cli::ShowArgs;
use crate::output::OutputWriter;
use anyhow::{bail, Result};
use unihelp_client::UniHelpClient;
use unihelp_core::lifecycle::{can_withdraw_funding, per_participant_share};
use unihelp_core::models::RequestId;

pub async fn join(args: ShowArgs, client: &UniHelpClient, output: &OutputWriter) -> Result<()> {
    let id = RequestId(args.id);
    let record = client.get_request(id).await?;

    client.participate_in_funding(&record).await?;

    // Participant count is server-authoritative; show the refetched state
    let fresh = client.get_request(id).await?;
    output.success(format!(
        "Joined funding for request {} ({} participants, {:.0} each)",
        args.id,
        fresh.current_participants,
        per_participant_share(&fresh)
    ));
    Ok(())
}

pub async fn withdraw(args: ShowArgs, client: &UniHelpClient, output: &OutputWriter) -> Result<()> {
    let id = RequestId(args.id);
    let record = client.get_request(id).await?;

    if !can_withdraw_funding(&record) {
        bail!(
            "Cannot withdraw from request {}: you must be a funder and the request must not have started",
            args.id
        );
    }

    client.withdraw_funding(id).await?;
    output.success(format!("Withdrew funding participation from request {}", args.id));
    Ok(())
}
