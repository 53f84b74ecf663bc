mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "nbu-rates")]
#[command(about = "Chart the last 7 days of official NBU exchange rates for one currency")]
struct Cli {
    /// Output format for the printed series: table, json, csv, markdown
    #[arg(long, default_value = "table")]
    output: String,

    #[command(flatten)]
    week: commands::week::WeekArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nbu_rates=info".parse()?)
                .add_directive("nbu_api=warn".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    commands::week::run(&cli.week, &format).await?;

    Ok(())
}
