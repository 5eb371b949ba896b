//! url-crossing CLI
//!
//! Usage:
//!   url-crossing [OPTIONS] <COMMAND>
//!
//! Commands:
//!   get <NAME> [ARGS]...     Generate a path (positional arguments)
//!   get <NAME> -p key=value  Generate a path (keyword arguments)
//!   resolve <PATH>           Resolve a path to its template and values
//!   list                     List templates in resolve order
//!
//! Options:
//!   -r, --routes <FILE>      Route file (TOML) [default: routes.toml]
//!   --syntax <SYNTAX>        Placeholder syntax: angle, colon or a regex
//!   --trailing-slash         Accept paths with or without a trailing slash
//!   --lenient                Ignore unknown keyword arguments

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use url_crossing::{Args, RegistryError, RouteFile, TemplateRegistry};

#[derive(Parser)]
#[command(name = "url-crossing")]
#[command(about = "Generate and resolve paths from named URL templates")]
struct Cli {
    /// Route file (TOML) with optional [settings] and a [routes] table
    #[arg(short, long, default_value = "routes.toml")]
    routes: PathBuf,

    /// Placeholder syntax: "angle", "colon" or a custom regex
    #[arg(long)]
    syntax: Option<String>,

    /// Accept paths with or without a trailing slash
    #[arg(long)]
    trailing_slash: bool,

    /// Ignore keyword arguments that name no placeholder
    #[arg(long)]
    lenient: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a path from a template name
    Get {
        /// Template name
        name: String,

        /// Positional values, filled left to right
        #[arg(conflicts_with = "params")]
        args: Vec<String>,

        /// Keyword value as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },

    /// Resolve a path to its template name and values
    Resolve {
        /// Concrete path
        path: String,
    },

    /// List templates in resolve order
    List,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let registry = match load_registry(&cli) {
        Ok(registry) => registry,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Get { name, args, params } => {
            let args = if params.is_empty() {
                Args::Positional(args)
            } else {
                Args::Keyword(params)
            };
            match registry.get(&name, args) {
                Ok(path) => {
                    println!("{path}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    report_error(&e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Resolve { path } => match registry.resolve(&path) {
            Some(resolved) => match toml::to_string(&resolved) {
                Ok(out) => {
                    print!("{out}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            },
            None => {
                eprintln!("no template matches '{path}'");
                ExitCode::FAILURE
            }
        },
        Command::List => {
            for (name, template) in registry.iter() {
                println!("{name}\t{template}");
            }
            ExitCode::SUCCESS
        }
    }
}

fn load_registry(cli: &Cli) -> Result<TemplateRegistry, String> {
    let mut file = RouteFile::from_file(&cli.routes)
        .map_err(|e| format!("Error loading routes '{}': {}", cli.routes.display(), e))?;

    if let Some(syntax) = &cli.syntax {
        file.settings.syntax = Some(syntax.clone());
    }
    if cli.trailing_slash {
        file.settings.trailing_slash = true;
    }
    if cli.lenient {
        file.settings.strict = Some(false);
    }

    tracing::debug!(routes = file.routes.len(), path = %cli.routes.display(), "route file read");
    file.into_registry().map_err(|e| format!("Error: {e}"))
}

fn report_error(err: &RegistryError) {
    match err.report() {
        Some(report) => eprint!("{report}"),
        None => eprintln!("Error [{}]: {err}", err.name()),
    }
}
