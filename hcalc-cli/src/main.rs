//! HidroCalc CLI - rational method and IDF calculators plus the project store.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hcalc-cli",
    version,
    about = "HidroCalc hydrology calculators from the command line"
)]
struct Cli {
    #[command(flatten)]
    settings: hcalc_cmd::Settings,

    #[command(subcommand)]
    command: hcalc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("backend {}", cli.settings.base_url);
    hcalc_cmd::run(cli.settings, cli.command).await
}
