use clap::{Parser, Subcommand};

mod contract;
mod seed;

#[derive(Debug, Parser)]
#[command(name = "bodegas-app", about = "Bodegas CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Seed(seed::SeedCommand),
    Contract(contract::ContractCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Seed(command) => seed::run(command),
            Commands::Contract(command) => contract::run(command).await,
        }
    }
}
