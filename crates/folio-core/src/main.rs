//! Folio - portfolio site generator and toolbox
//!
//! Command payloads (HTML, URLs, section anchors) go to stdout; diagnostics
//! go to stderr so output stays pipeable.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};

use folio_common::{Error, Result};
use folio_content::catalog::builtin_registry;
use folio_content::{route_query, Registry};
use folio_core::logging::{init_logging, LogConfig, LogLevel};
use folio_core::{ContactMessage, ModalSession, Msg, SurfaceOp, ThemeStore};
use folio_render::{render_page, RenderConfig, Theme};

/// Folio - portfolio site generator
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Render configuration file (JSON)
    #[arg(long, short = 'c', global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the complete site page
    Render(RenderArgs),

    /// Render one project's detail fragment
    Project(ProjectArgs),

    /// Route a search query to its page section anchor
    Search(SearchArgs),

    /// Compose a contact mailto URL
    Mailto(MailtoArgs),

    /// Get, set, or toggle the saved theme preference
    Theme(ThemeArgs),

    /// Validate the built-in project catalog
    Check,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Write the page here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Color theme (light or dark); overrides config and saved preference
    #[arg(long)]
    theme: Option<Theme>,

    /// Page title override
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    /// Project slug (e.g. "coastal")
    slug: String,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Free-text query
    query: String,
}

#[derive(Args, Debug)]
struct MailtoArgs {
    /// Sender name
    #[arg(long)]
    name: String,

    /// Sender address
    #[arg(long)]
    email: String,

    /// Message subject
    #[arg(long)]
    subject: String,

    /// Message body
    #[arg(long)]
    message: String,

    /// Recipient; defaults to the configured owner address
    #[arg(long)]
    to: Option<String>,
}

#[derive(Args, Debug)]
struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommands,

    /// Preference file path (defaults to the user config directory)
    #[arg(long)]
    store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ThemeCommands {
    /// Print the saved theme
    Get,
    /// Save a theme preference
    Set {
        /// light or dark
        theme: Theme,
    },
    /// Flip the saved theme and print the new value
    Toggle,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_env(cli.global.log_level));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.code(), category = %err.category(), "{err}");
            ExitCode::from(err.code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = builtin_registry()?;
    let config = load_render_config(cli.global.config.as_deref())?;

    match cli.command {
        Commands::Render(args) => cmd_render(&registry, config, args),
        Commands::Project(args) => cmd_project(&registry, args),
        Commands::Search(args) => {
            let section = route_query(&args.query);
            println!("{}", section.anchor());
            Ok(())
        }
        Commands::Mailto(args) => {
            let msg = ContactMessage::new(args.name, args.email, args.subject, args.message);
            let recipient = args.to.unwrap_or(config.owner.email);
            println!("{}", msg.mailto(&recipient)?);
            Ok(())
        }
        Commands::Theme(args) => cmd_theme(args),
        Commands::Check => {
            debug!(projects = registry.len(), "catalog valid");
            println!("catalog ok: {} projects", registry.len());
            Ok(())
        }
    }
}

fn load_render_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Ok(RenderConfig::from_json(&contents)?)
        }
        None => Ok(RenderConfig::default()),
    }
}

fn cmd_render(registry: &Registry, mut config: RenderConfig, args: RenderArgs) -> Result<()> {
    if let Some(title) = args.title {
        config = config.with_title(title);
    }
    config.theme = match args.theme {
        Some(theme) => theme,
        None => match ThemeStore::default_location() {
            Some(store) => store.load().unwrap_or(config.theme),
            None => config.theme,
        },
    };

    let html = render_page(registry, &config).map_err(|err| Error::Render(err.to_string()))?;
    match args.output {
        Some(path) => {
            fs::write(&path, html)?;
            debug!(path = %path.display(), "page written");
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn cmd_project(registry: &Registry, args: ProjectArgs) -> Result<()> {
    let mut session = ModalSession::new(registry);
    match session.update(Msg::select(args.slug.as_str())) {
        Some(SurfaceOp::Mount { fragment }) => {
            print!("{fragment}");
            Ok(())
        }
        _ => Err(Error::UnknownProject { slug: args.slug }),
    }
}

fn cmd_theme(args: ThemeArgs) -> Result<()> {
    let store = match args.store {
        Some(path) => ThemeStore::new(path),
        None => ThemeStore::default_location().ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no user config directory; pass --store",
            ))
        })?,
    };

    match args.command {
        ThemeCommands::Get => println!("{}", store.load()?),
        ThemeCommands::Set { theme } => {
            store.save(theme)?;
            println!("{theme}");
        }
        ThemeCommands::Toggle => println!("{}", store.toggle()?),
    }
    Ok(())
}
