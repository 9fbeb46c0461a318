//! `grid-invite` command-line front end

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use grid_invite::{InviteConfig, InviteError, InviteResolver, InviteRoute};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("grid-invite")
        .version(grid_invite::VERSION)
        .about("Check invite cheatcodes and resolve provider settings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file"),
        )
        .arg(
            Arg::new("resource-root")
                .long("resource-root")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory containing resources/providers/"),
        )
        .subcommand(
            Command::new("check")
                .about("Check whether a code is a well-formed cheatcode")
                .arg(Arg::new("code").required(true)),
        )
        .subcommand(
            Command::new("resolve")
                .about("Print provider settings for a cheatcode")
                .arg(Arg::new("code").required(true)),
        )
        .subcommand(
            Command::new("invite")
                .about("Validate and route an invite code")
                .arg(Arg::new("code").required(true).num_args(1..)),
        )
        .subcommand(
            Command::new("complete")
                .about("Complete a partially typed cheatcode")
                .arg(Arg::new("partial").required(true))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Maximum number of suggestions"),
                ),
        )
        .subcommand(Command::new("providers").about("List provider identifiers"))
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<InviteConfig> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => InviteConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => InviteConfig::default(),
    };
    let mut config = config.with_env_overrides();
    if let Some(root) = matches.get_one::<PathBuf>("resource-root") {
        config = config.with_resource_root(root);
    }
    Ok(config)
}

fn code_arg(args: &ArgMatches, name: &str) -> String {
    args.get_many::<String>(name)
        .map(|parts| parts.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<Outcome> {
    let config = load_config(matches)?;
    tracing::debug!("Resource root: {}", config.resource_root.display());
    let resolver = InviteResolver::from_config(&config);

    match matches.subcommand() {
        Some(("check", args)) => {
            let code = code_arg(args, "code");
            match resolver.validator().parse(&code) {
                Ok(_) => {
                    println!("{code}: valid");
                    Ok(Outcome::Success)
                }
                Err(e) => {
                    println!("{code}: invalid ({e})");
                    Ok(Outcome::Failure)
                }
            }
        }
        Some(("resolve", args)) => {
            let code = code_arg(args, "code");
            match resolver.providers().lookup(&code)? {
                Some(settings) => {
                    println!("{}", serde_json::to_string_pretty(&settings)?);
                    Ok(Outcome::Success)
                }
                None => {
                    eprintln!("no provider settings for '{code}'");
                    Ok(Outcome::Failure)
                }
            }
        }
        Some(("invite", args)) => match resolver.resolve_invite(&code_arg(args, "code")) {
            Ok(route) => {
                if matches!(route, InviteRoute::Wormhole { .. }) {
                    tracing::debug!("Invite code needs the invite server");
                }
                println!("{}", serde_json::to_string_pretty(&route)?);
                Ok(Outcome::Success)
            }
            Err(e @ (InviteError::InvalidCode(_) | InviteError::UnknownProvider(_))) => {
                eprintln!("{e}");
                Ok(Outcome::Failure)
            }
            Err(e) => Err(e.into()),
        },
        Some(("complete", args)) => {
            let limit = args.get_one::<usize>("limit").copied().or(config.max_completions);
            let partial = code_arg(args, "partial");
            for suggestion in resolver.completer(limit).complete(&partial) {
                println!("{suggestion}");
            }
            Ok(Outcome::Success)
        }
        Some(("providers", _)) => {
            for name in resolver.providers().providers()? {
                println!("{name}");
            }
            Ok(Outcome::Success)
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();
    match run(&matches) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
