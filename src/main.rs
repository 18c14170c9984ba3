use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgMatches;
use env_logger::Env;

use opparse::cli::build_cli;
use opparse::config::{ConfigErr, CONFIG};
use opparse::exe::Executor;
use opparse::repl;
use opparse::result::{ExeErr, ExeErrKind, ExeResult};

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let result = configure(&matches).and_then(|_| init_logger()).and_then(|_| run(&matches));

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// The default filter comes from the `debug` config entry. `RUST_LOG`
/// overrides it as usual.
fn init_logger() -> Result<(), ExeErr> {
    let config_err = |err: ConfigErr| ExeErr::new(ExeErrKind::ConfigErr(err));
    let filter = CONFIG
        .read()
        .map_err(|err| config_err(ConfigErr::new("debug", &err.to_string())))?
        .log_filter()
        .map_err(config_err)?;
    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
    Ok(())
}

fn configure(matches: &ArgMatches) -> Result<(), ExeErr> {
    let config_err = |err: ConfigErr| ExeErr::new(ExeErrKind::ConfigErr(err));
    let mut config = CONFIG
        .write()
        .map_err(|err| config_err(ConfigErr::new("config", &err.to_string())))?;
    config.set_bool("debug", matches.get_flag("debug")).map_err(config_err)?;
    if let Some(format) = matches.get_one::<String>("format") {
        config.set_str("format", format).map_err(config_err)?;
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> ExeResult {
    if let Some(code) = matches.get_one::<String>("code") {
        let rendered = Executor::from_config()?.execute_text(code)?;
        println!("{rendered}");
        return Ok(0);
    }

    match matches.get_one::<String>("FILE_NAME").map(String::as_str) {
        Some("-") => Executor::from_config()?.execute_stdin(&mut io::stdout().lock()),
        Some(file_name) => {
            Executor::from_config()?.execute_file(file_name, &mut io::stdout().lock())
        }
        None => repl::run(get_history_path(matches)),
    }
}

/// Get path to REPL history file. A leading `~` is expanded to the
/// user's home directory. If the home directory can't be found,
/// history is disabled.
fn get_history_path(matches: &ArgMatches) -> Option<PathBuf> {
    if matches.get_flag("no_history") {
        return None;
    }
    let path = matches.get_one::<String>("history_path")?;
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
        None => Some(PathBuf::from(path)),
    }
}
