use clap::{Args, Subcommand};

mod render;

#[derive(Debug, Args)]
pub(crate) struct ContractCommand {
    #[command(subcommand)]
    command: ContractSubcommand,
}

#[derive(Debug, Subcommand)]
enum ContractSubcommand {
    Render(render::RenderContractArgs),
}

pub(crate) async fn run(command: ContractCommand) -> Result<(), String> {
    match command.command {
        ContractSubcommand::Render(args) => render::run(args).await,
    }
}
