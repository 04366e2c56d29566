// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands;

use commands::run::RunArgs;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return Some(lang.clone());
        }
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

fn config_arg(locale: &str) -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help(t!("arg_config", locale = locale).to_string())
        .value_name("CONFIG")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

/// Arguments shared by every command that talks to the service.
fn connection_args(cmd: Command, locale: &str) -> Command {
    cmd.arg(config_arg(locale))
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help(t!("arg_base_url", locale = locale).to_string())
                .value_name("URL")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .help(t!("arg_token", locale = locale).to_string())
                .value_name("TOKEN")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .help(t!("arg_api_key", locale = locale).to_string())
                .value_name("KEY")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verify-delay")
                .long("verify-delay")
                .help(t!("arg_verify_delay", locale = locale).to_string())
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set),
        )
}

fn build_cli(locale: &str) -> Command {
    Command::new("revenue-matrix")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            connection_args(
                Command::new("run").about(t!("cmd_run_about", locale = locale).to_string()),
                locale,
            )
            .arg(
                Arg::new("delay")
                    .short('d')
                    .long("delay")
                    .help(t!("arg_delay", locale = locale).to_string())
                    .value_name("SECONDS")
                    .value_parser(clap::value_parser!(u64))
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("output-dir")
                    .short('o')
                    .long("output-dir")
                    .help(t!("arg_output_dir", locale = locale).to_string())
                    .value_name("DIR")
                    .value_parser(clap::value_parser!(PathBuf))
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("filter")
                    .short('f')
                    .long("filter")
                    .help(t!("arg_filter", locale = locale).to_string())
                    .value_name("TEXT")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("skip-verify")
                    .long("skip-verify")
                    .help(t!("arg_skip_verify", locale = locale).to_string())
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(connection_args(
            Command::new("verify").about(t!("cmd_verify_about", locale = locale).to_string()),
            locale,
        ))
        .subcommand(
            Command::new("list")
                .about(t!("cmd_list_about", locale = locale).to_string())
                .arg(config_arg(locale))
                .arg(
                    Arg::new("filter")
                        .short('f')
                        .long("filter")
                        .help(t!("arg_filter", locale = locale).to_string())
                        .value_name("TEXT")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .help(t!("arg_init_output", locale = locale).to_string())
                        .value_name("PATH")
                        .default_value(crate::core::config::DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Reads an optional argument that may not be defined on every subcommand.
fn opt<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Option<T> {
    matches.try_get_one::<T>(id).ok().flatten().cloned()
}

fn run_args(matches: &ArgMatches) -> RunArgs {
    RunArgs {
        config: opt(matches, "config"),
        base_url: opt(matches, "base-url"),
        token: opt(matches, "token"),
        api_key: opt(matches, "api-key"),
        delay_secs: opt(matches, "delay"),
        verify_delay_secs: opt(matches, "verify-delay"),
        output_dir: opt(matches, "output-dir"),
        filter: opt(matches, "filter"),
        skip_verify: opt::<bool>(matches, "skip-verify").unwrap_or(false),
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let explicit_language = pre_parse_language();
    let language = match &explicit_language {
        Some(lang) => crate::resolve_locale(lang).to_string(),
        None => {
            crate::init();
            rust_i18n::locale().to_string()
        }
    };
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    let explicit_language = explicit_language.is_some();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            commands::run::execute(run_args(run_matches), explicit_language).await?;
        }
        Some(("verify", verify_matches)) => {
            commands::verify::execute(run_args(verify_matches), explicit_language).await?;
        }
        Some(("list", list_matches)) => {
            let config = list_matches.get_one::<PathBuf>("config").cloned();
            let filter = list_matches.get_one::<String>("filter").cloned();
            commands::list::execute(config, filter, explicit_language)?;
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(crate::core::config::DEFAULT_CONFIG_FILE));
            let non_interactive = init_matches.get_flag("non-interactive");
            let force = init_matches.get_flag("force");
            commands::init::run_init_wizard(&output, &language, non_interactive, force)?;
        }
        _ => {
            // No subcommand: a plain run with everything discovered or prompted.
            commands::run::execute(RunArgs::default(), explicit_language).await?;
        }
    }
    Ok(())
}
