use std::path::PathBuf;

use bodegas_app::context::AppContext;
use clap::Args;
use jiff::{Zoned, civil::Date};

#[derive(Debug, Args)]
pub(crate) struct RenderContractArgs {
    /// Bodega id or codigo
    identifier: String,

    /// JSON seed file; the built-in layout is used when omitted
    #[arg(long, env = "BODEGAS_SEED_FILE")]
    seed_file: Option<PathBuf>,

    /// Contract date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<Date>,
}

pub(crate) async fn run(args: RenderContractArgs) -> Result<(), String> {
    println!("{}", render(args).await?);

    Ok(())
}

async fn render(args: RenderContractArgs) -> Result<String, String> {
    let context = AppContext::seeded(args.seed_file.as_deref())
        .map_err(|error| format!("failed to load bodegas: {error}"))?;

    let generated_on = args.date.unwrap_or_else(|| Zoned::now().date());

    let document = context
        .bodegas
        .contract_document(&args.identifier, generated_on)
        .await
        .map_err(|error| format!("failed to render contract: {error}"))?;

    Ok(document.text)
}
