//! Command implementations

mod config;
mod create;
mod fund;
mod list;
mod my;
mod show;
mod work;

use crate::cli::{Cli, Commands, FundCommands, MyCommands};
use crate::config_loader::{build_client, load_config};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let app_config = load_config(&cli)?;
    let client = build_client(&app_config);

    match cli.command {
        Commands::List(args) => list::execute(args, &client, &app_config, &output).await,
        Commands::Show(args) => show::execute(args, &client, &app_config, &output).await,
        Commands::Create(args) => create::execute(args, &client, &output).await,
        Commands::Delete(args) => show::delete(args, &client, &output).await,
        Commands::Accept(args) => work::accept(args, &client, &output).await,
        Commands::Complete(args) => work::complete(args, &client, &output).await,
        Commands::Rate(args) => work::rate(args, &client, &output).await,
        Commands::Fund(args) => match args.command {
            FundCommands::Join(args) => fund::join(args, &client, &output).await,
            FundCommands::Withdraw(args) => fund::withdraw(args, &client, &output).await,
        },
        Commands::My(args) => match args.command {
            MyCommands::Requests(args) => my::requests(args, &client, &app_config, &output).await,
            MyCommands::Works(args) => my::works(args, &client, &app_config, &output).await,
            MyCommands::Fundings(args) => my::fundings(args, &client, &app_config, &output).await,
            MyCommands::Point => my::point(&client, &output).await,
            MyCommands::WithdrawPoint(args) => my::withdraw_point(args, &client, &output).await,
        },
        Commands::Config => config::execute(&app_config, &output),
    }
}
