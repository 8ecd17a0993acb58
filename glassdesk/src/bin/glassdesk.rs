use anyhow::Result;
use clap::{arg, command, ArgMatches};
use glassdesk::{FileStore, JsonLinesRenderer};
use glassdesk_core::{CommandPipe, Manager};
use std::env;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let matches = command!("glassdesk")
        .about("Runs the desktop shell, reading commands from stdin and writing changes to stdout")
        .help_template(glassdesk::utils::get_help_template())
        .args(&[
            arg!(-c --config <FILE> "Use this configuration file instead of the default one")
                .required(false),
            arg!(-s --store <FILE> "Keep the wallpaper and widgets in this file").required(false),
            arg!(--commands <FILE> "Read commands from this file instead of stdin")
                .required(false),
            arg!(-l --"log-level" <FILTER> "Log filter, overrides RUST_LOG and the config")
                .required(false),
            arg!(--"in-memory" "Neither read nor write the desktop settings"),
        ])
        .get_matches();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = rt.block_on(run(&matches));
    // The stdin reader sits in a blocking read that cannot be cancelled, so
    // waiting for it would hang until the next line arrives.
    rt.shutdown_background();
    tracing::info!("glassdesk stopped");
    result
}

async fn run(matches: &ArgMatches) -> Result<()> {
    let config = glassdesk::config::load(matches.get_one::<String>("config").map(Path::new));

    let log_level = matches
        .get_one::<String>("log-level")
        .cloned()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.log_level.clone());
    glassdesk::utils::log::setup_logging(&log_level);
    tracing::info!("glassdesk {} starting", env!("CARGO_PKG_VERSION"));

    let store_path = match matches.get_one::<String>("store") {
        Some(path) => Some(PathBuf::from(path)),
        None if matches.get_flag("in-memory") => None,
        None => config
            .store_path()
            .map_err(|err| tracing::warn!("No place for the desktop settings: {}", err))
            .ok(),
    };

    let mut manager = Manager::<glassdesk::Config, JsonLinesRenderer>::new(config);
    if let Some(path) = store_path {
        match FileStore::open(&path) {
            Ok(store) => manager = manager.with_store(store),
            Err(err) => tracing::error!(
                "Cannot open desktop settings {}: {}. Changes will not be saved.",
                path.display(),
                err
            ),
        }
    }

    let command_pipe = match matches.get_one::<String>("commands") {
        Some(path) => CommandPipe::new(tokio::fs::File::open(path).await?),
        None => CommandPipe::new(tokio::io::stdin()),
    };

    manager.event_loop(command_pipe).await;
    Ok(())
}
