//! CLI command definitions, routing, and tracing setup.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use coursegrid_parsers::{ParserRegistry, parse_schedule};
use coursegrid_shared::{AppConfig, CourseGridError, init_config, load_config};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// coursegrid — turn a course-portal timetable page into structured data.
#[derive(Parser)]
#[command(
    name = "coursegrid",
    version,
    about = "Decode a saved course-portal timetable page into a JSON schedule.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Parse a timetable page and print the schedule as JSON.
    Parse {
        /// HTML file to read; stdin when omitted or `-`.
        file: Option<PathBuf>,

        /// Institution parser id (defaults to the configured one).
        #[arg(short, long, env = "COURSEGRID_INSTITUTION")]
        institution: Option<String>,

        /// Print JSON on a single line.
        #[arg(long)]
        compact: bool,
    },

    /// List the supported institutions.
    Institutions,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "coursegrid=info",
        1 => "coursegrid=debug",
        _ => "coursegrid=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse {
            file,
            institution,
            compact,
        } => cmd_parse(file.as_deref(), institution.as_deref(), compact),
        Command::Institutions => cmd_institutions(),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// Effective parse settings after merging flags over config.
#[derive(Debug, PartialEq, Eq)]
struct ParseOptions {
    institution: String,
    pretty: bool,
}

impl ParseOptions {
    fn resolve(config: &AppConfig, institution: Option<&str>, compact: bool) -> Self {
        Self {
            institution: institution
                .map(String::from)
                .unwrap_or_else(|| config.defaults.institution.clone()),
            pretty: config.defaults.pretty && !compact,
        }
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_parse(file: Option<&Path>, institution: Option<&str>, compact: bool) -> Result<()> {
    let config = load_config()?;
    let opts = ParseOptions::resolve(&config, institution, compact);

    let registry = ParserRegistry::new();
    let parser = registry.get(&opts.institution)?;

    let source = read_source(file)?;
    info!(institution = %opts.institution, bytes = source.len(), "parsing timetable");

    let schedule = parse_schedule(parser, &source);

    let json = if opts.pretty {
        serde_json::to_string_pretty(&schedule)
    } else {
        serde_json::to_string(&schedule)
    }
    .map_err(CourseGridError::from)?;

    println!("{json}");
    Ok(())
}

/// Read the whole page from `file`, or stdin for `None` / `-`.
fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading timetable file");
            std::fs::read_to_string(path)
                .map_err(|e| CourseGridError::io(path, e))
                .wrap_err("could not read timetable page")
        }
        _ => {
            debug!("reading timetable from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CourseGridError::io("<stdin>", e))?;
            Ok(buf)
        }
    }
}

fn cmd_institutions() -> Result<()> {
    let registry = ParserRegistry::new();
    for parser in registry.iter() {
        let table = parser.generate_time_table();
        println!(
            "{:<10} {} ({} periods)",
            parser.id(),
            table.name,
            table.periods.len()
        );
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
