use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use xfchess_rules::{default_settings_path, load_settings, save_settings, Cli, Session};

fn init_logging(filter: Option<&str>) {
    let filter = filter
        .and_then(|f| EnvFilter::try_new(f).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let settings_path = cli.settings.clone().unwrap_or_else(default_settings_path);
    let settings = load_settings(&settings_path);
    if cli.write_settings {
        save_settings(&settings, &settings_path)
            .with_context(|| format!("writing settings to {}", settings_path.display()))?;
    }

    let stdout = io::stdout();
    let mut session = Session::new(settings, stdout.lock());
    session.start()?;

    if let Some(script) = &cli.moves {
        info!("[SESSION] Running script");
        session.run_script(script)?;
        return Ok(());
    }

    session.run_interactive(io::stdin().lock())?;
    Ok(())
}
