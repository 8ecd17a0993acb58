use anyhow::{bail, Result};
use clap::{arg, command};
use glassdesk::{Config, FileStore};
use glassdesk_core::models::WidgetDescriptor;
use glassdesk_core::store::{WALLPAPER_KEY, WIDGETS_KEY};
use glassdesk_core::utils::command_pipe::parse_command;
use glassdesk_core::{Command, KeyValueStore};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let matches = command!("glassdesk Check")
        .about("Checks the configuration file, the desktop settings and command scripts")
        .help_template(glassdesk::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!(-s --store <FILE> "Desktop settings file to check instead of the configured one")
                .required(false),
            arg!(--commands <FILE> "Command script to check line by line").required(false),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config directory otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let config_file = matches.get_one::<String>("INPUT").map(Path::new);

    println!(
        "\x1b[0;94m::\x1b[0m glassdesk version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match glassdesk::config::load_from_file(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config.check_log_level(verbose);
            config.check_geometry(verbose);
            config
        }
        Err(err) => {
            println!("Configuration failed. Reason: {err:?}");
            Config::default()
        }
    };

    println!("\x1b[0;94m::\x1b[0m Checking desktop settings . . .");
    let store_path = match matches.get_one::<String>("store") {
        Some(path) => PathBuf::from(path),
        None => config.store_path()?,
    };
    check_store(&store_path, verbose);

    if let Some(path) = matches.get_one::<String>("commands") {
        println!("\x1b[0;94m::\x1b[0m Checking commands . . .");
        check_commands(Path::new(path), verbose)?;
    }

    Ok(())
}

fn check_store(path: &Path, verbose: bool) {
    if verbose {
        dbg!(path);
    }
    let store = match FileStore::open(path) {
        Ok(store) => store,
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {} is unreadable: {} \x1b[0m", path.display(), err);
            return;
        }
    };
    match store.get(WALLPAPER_KEY) {
        Ok(Some(url)) if verbose => println!("Wallpaper: {url}"),
        Ok(_) => {}
        Err(err) => println!("\x1b[1;91mERROR:\x1b[0m wallpaper slot: {err}"),
    }
    let widgets = match store.get(WIDGETS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            println!("\x1b[0;92m    -> No widgets stored \x1b[0m");
            return;
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m widgets slot: {err}");
            return;
        }
    };
    match serde_json::from_str::<Vec<WidgetDescriptor>>(&widgets) {
        Ok(widgets) => {
            let mut seen = HashSet::new();
            for widget in &widgets {
                if !seen.insert(&widget.id) {
                    println!(
                        "\x1b[1;93mWARN:\x1b[0m widget {} is stored twice, only the first copy is kept.",
                        widget.id
                    );
                }
            }
            println!("\x1b[0;92m    -> {} widgets OK \x1b[0m", widgets.len());
        }
        Err(err) => println!(
            "\x1b[1;91mERROR:\x1b[0m\x1b[1m stored widgets are malformed and will be ignored: {err} \x1b[0m"
        ),
    }
}

fn check_commands(path: &Path, verbose: bool) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    let mut failures = 0;
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_command(line) {
            Ok(Command::Other(raw)) => {
                failures += 1;
                println!("line {}: unknown command `{raw}`", number + 1);
            }
            Ok(cmd) if verbose => println!("line {}: {cmd:?}", number + 1),
            Ok(_) => {}
            Err(err) => {
                failures += 1;
                println!("line {}: {err}", number + 1);
            }
        }
    }
    if failures > 0 {
        println!(
            "\x1b[1;91mERROR:\x1b[0m\x1b[1m {failures} command(s) in {} will be ignored \x1b[0m",
            path.display()
        );
        bail!("{failures} bad command(s) in {}", path.display());
    }
    println!("\x1b[0;92m    -> Commands OK \x1b[0m");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_command_scripts_fail_the_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.txt");
        fs::write(&path, "# setup\nLaunchApp writer\nMoveWidget widget-1 inf 0 10 10\nDance\n").unwrap();
        let err = check_commands(&path, false).unwrap_err();
        assert!(err.to_string().starts_with("2 bad command(s)"));
    }

    #[test]
    fn good_command_scripts_pass() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.txt");
        fs::write(&path, "LaunchApp writer\n\nReboot\nShutdown\n").unwrap();
        assert!(check_commands(&path, true).is_ok());
    }
}
