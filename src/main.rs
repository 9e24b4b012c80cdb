mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::QueryWorkflow;

#[tokio::main]
async fn main() -> Result<()> {
    roster::logging::initialize();

    let cli = parse_cli();
    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let workflow = QueryWorkflow::from_config(&resolved);
    let outcome = workflow.run(&cli.phrase).await;

    match cli.output {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
