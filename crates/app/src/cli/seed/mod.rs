use clap::{Args, Subcommand};

mod check;

#[derive(Debug, Args)]
pub(crate) struct SeedCommand {
    #[command(subcommand)]
    command: SeedSubcommand,
}

#[derive(Debug, Subcommand)]
enum SeedSubcommand {
    Check(check::CheckSeedArgs),
}

pub(crate) fn run(command: SeedCommand) -> Result<(), String> {
    match command.command {
        SeedSubcommand::Check(args) => check::run(&args),
    }
}
