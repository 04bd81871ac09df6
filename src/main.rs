use anyhow::Context;
use clap::Parser;

use container_intents::cli::Args;
use container_intents::config::Config;
use container_intents::containers::IntentKind;
use container_intents::logging::init_tracing;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging.filter);

    let pretty = config.output.pretty && !args.compact;

    let Some(intent) = args.command.into_intent()? else {
        for kind in IntentKind::ALL {
            println!("{}", kind);
        }
        return Ok(());
    };
    tracing::debug!(kind = %intent.kind(), "built intent");

    let json = if pretty {
        serde_json::to_string_pretty(&intent)
    } else {
        serde_json::to_string(&intent)
    }
    .context("failed to serialize intent")?;
    println!("{}", json);
    Ok(())
}
