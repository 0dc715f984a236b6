use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use securehash_core::{ClassifiedError, DigestResult, HashService};
use std::io::Read;

mod config;

use crate::config::ConfigManager;

#[derive(Parser)]
#[command(name = "securehash")]
#[command(author, version, about = "Secure string digest tool with algorithm whitelisting", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a digest of a string
    Hash {
        /// Text to hash (omit to read from stdin)
        input: Option<String>,

        /// Digest algorithm to use (defaults to the configured algorithm)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Contextual prefix hashed in front of the input
        #[arg(short, long)]
        context: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the supported (secure) digest algorithms
    Algorithms {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if cli.debug {
        "debug"
    } else {
        "warn"
    }))
    .init();

    let app_config = ConfigManager::new()?.load()?;
    let default_format = parse_format(&app_config.output.default_format);
    if !app_config.output.color_enabled {
        colored::control::set_override(false);
    }

    // Configuration problems are fatal at startup, not per-request
    let service = HashService::new(app_config.service.clone())
        .context("Service configuration is invalid")?;

    match cli.command {
        Commands::Hash {
            input,
            algorithm,
            context,
            format,
        } => {
            let input = match input {
                Some(text) => text,
                None => read_stdin()?,
            };
            let result = match (algorithm.as_deref(), context.as_deref()) {
                (Some(name), Some(ctx)) => service.compute_hash_with_context(&input, name, ctx),
                (Some(name), None) => service.compute_hash(&input, name),
                (None, None) => service.compute_hash_default(&input),
                (None, Some(ctx)) => {
                    let name = app_config.service.default_algorithm.clone();
                    service.compute_hash_with_context(&input, &name, ctx)
                }
            };
            match result {
                Ok(digest) => print_digest(&digest, format.unwrap_or(default_format))?,
                Err(err) => report_failure(&err),
            }
        }
        Commands::Algorithms { format } => {
            print_algorithms(&service, format.unwrap_or(default_format))?;
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read input from stdin")?;
    Ok(buffer)
}

fn print_digest(digest: &DigestResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(digest)?);
        }
        OutputFormat::Text => {
            println!(
                "{}: {}",
                digest.algorithm.canonical_name().bold(),
                digest.hex_digest.green()
            );
            println!(
                "{} {} ({} µs)",
                "computed".dimmed(),
                digest.computed_at.to_rfc3339().dimmed(),
                digest.elapsed_micros
            );
        }
    }
    Ok(())
}

fn print_algorithms(service: &HashService, format: OutputFormat) -> Result<()> {
    let descriptors = service.list_supported_algorithms();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(descriptors)?);
        }
        OutputFormat::Text => {
            for descriptor in descriptors {
                println!(
                    "{:<10} {:<8} {}",
                    descriptor.name.bold(),
                    descriptor.performance_class.to_string().cyan(),
                    descriptor.description
                );
            }
        }
    }
    Ok(())
}

/// Print the caller-safe message and exit non-zero
fn report_failure(err: &ClassifiedError) -> ! {
    eprintln!("{} {}", "error:".red().bold(), err.user_message);
    if !err.kind.exposes_detail() {
        eprintln!("{} {}", "reference:".dimmed(), err.correlation_id);
    }
    std::process::exit(1);
}

fn parse_format(name: &str) -> OutputFormat {
    match name.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}
