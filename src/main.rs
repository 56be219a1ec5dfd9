/// Version injected at compile time via UTHO_PROVIDER_VERSION env var (set by
/// CI/CD), or the crate version for local builds.
pub const VERSION: &str = match option_env!("UTHO_PROVIDER_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;
use utho_provider::resource::{Diagnostic, DynamicResource, ResourceRegistry};
use utho_provider::{ProviderConfig, UthoClient, UthoProvider};

/// Drive Utho resource adapters from the command line
#[derive(Parser, Debug)]
#[command(name = "utho-provider", version = VERSION, about, long_about = None)]
struct Args {
    /// Utho API token; UTHO_TOKEN is used when neither this nor the config
    /// file sets one
    #[arg(long)]
    token: Option<String>,

    /// API root (defaults to the production endpoint)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a resource from a plan file and print its state
    Create { type_name: String, plan: PathBuf },
    /// Refresh a resource from a state file
    Read { type_name: String, state: PathBuf },
    /// Apply a plan to an existing resource
    Update {
        type_name: String,
        plan: PathBuf,
        state: PathBuf,
    },
    /// Delete the resource a state file describes
    Delete { type_name: String, state: PathBuf },
    /// Import an existing resource by id
    Import { type_name: String, id: String },
    /// Read a data source
    Data { type_name: String },
    /// List registered resource and data source types
    List,
    /// Persist --token / --base-url to the user config file
    SaveConfig,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing_level.to_string().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking.with_max_level(Level::TRACE))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("utho-provider {} started with log level: {:?}", VERSION, level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("utho").join("utho-provider.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".utho").join("utho-provider.log");
    }
    PathBuf::from("utho-provider.log")
}

/// Read a plan or state file; `.yaml`/`.yml` are parsed as YAML, anything
/// else as JSON.
fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(&content).with_context(|| format!("invalid YAML in {}", path.display()))
    } else {
        serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn lookup<'a>(resources: &'a ResourceRegistry, name: &str) -> Result<&'a dyn DynamicResource> {
    resources
        .get(name)
        .ok_or_else(|| anyhow!("unknown resource type {name:?}; try `list`"))
}

/// Provider header and every registered type name. Only names are read, so
/// the client carries no token.
fn type_listing(provider: &UthoProvider) -> Result<Vec<String>> {
    let client = UthoClient::new("")?;
    let meta = provider.metadata();
    let mut lines = vec![format!("{} {}", meta.type_name, meta.version)];
    for name in provider.resources(&client).keys() {
        lines.push(format!("resource    {name}"));
    }
    for name in provider.data_sources(&client).keys() {
        lines.push(format!("data source {name}"));
    }
    Ok(lines)
}

fn diagnostics_error(diags: &[Diagnostic]) -> anyhow::Error {
    let lines: Vec<String> = diags.iter().map(|d| d.to_string()).collect();
    anyhow!(lines.join("\n"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let config = ProviderConfig::load().with_overrides(args.token.clone(), args.base_url.clone());

    if let Command::SaveConfig = args.command {
        config.save().context("failed to save config")?;
        if let Some(path) = ProviderConfig::config_path() {
            println!("saved {}", path.display());
        }
        return Ok(());
    }

    let provider = UthoProvider::new(VERSION);

    if let Command::List = args.command {
        for line in type_listing(&provider)? {
            println!("{line}");
        }
        return Ok(());
    }

    let client = provider
        .configure(&config)
        .map_err(|diags| diagnostics_error(&diags))?;

    let resources = provider.resources(&client);
    let data_sources = provider.data_sources(&client);

    match args.command {
        Command::Create { type_name, plan } => {
            let plan = read_document(&plan)?;
            let state = lookup(&resources, &type_name)?.create(plan).await?;
            print_json(&state)?;
        }
        Command::Read { type_name, state } => {
            let state = read_document(&state)?;
            let state = lookup(&resources, &type_name)?.read(state).await?;
            print_json(&state)?;
        }
        Command::Update {
            type_name,
            plan,
            state,
        } => {
            let plan = read_document(&plan)?;
            let prior = read_document(&state)?;
            let state = lookup(&resources, &type_name)?.update(plan, prior).await?;
            print_json(&state)?;
        }
        Command::Delete { type_name, state } => {
            let state = read_document(&state)?;
            lookup(&resources, &type_name)?.delete(state).await?;
        }
        Command::Import { type_name, id } => {
            let state = lookup(&resources, &type_name)?.import(&id).await?;
            print_json(&state)?;
        }
        Command::Data { type_name } => {
            let Some(source) = data_sources.get(&type_name) else {
                bail!("unknown data source type {type_name:?}; try `list`");
            };
            let state = source.read().await?;
            print_json(&state)?;
        }
        // handled before the client is configured
        Command::List | Command::SaveConfig => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_flag_ignores_environment() {
        // UTHO_TOKEN is resolved after the config file, never through the flag
        std::env::set_var("UTHO_TOKEN", "from-env");
        let args = Args::try_parse_from(["utho-provider", "save-config"]).unwrap();
        assert!(args.token.is_none());

        let config = ProviderConfig {
            token: Some("from-config".into()),
            base_url: None,
        }
        .with_overrides(args.token, args.base_url);
        assert_eq!(config.token.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_explicit_token_flag_wins() {
        let args =
            Args::try_parse_from(["utho-provider", "--token", "from-flag", "list"]).unwrap();
        let config = ProviderConfig {
            token: Some("from-config".into()),
            base_url: None,
        }
        .with_overrides(args.token, args.base_url);
        assert_eq!(config.token.as_deref(), Some("from-flag"));
        assert!(matches!(args.command, Command::List));
    }

    #[test]
    fn test_list_needs_no_token() {
        let lines = type_listing(&UthoProvider::new("1.2.3")).unwrap();
        assert_eq!(lines[0], "utho 1.2.3");
        assert!(lines.contains(&"resource    utho_cloud_instance".to_string()));
        assert!(lines.contains(&"resource    utho_sqs".to_string()));
        assert!(lines.contains(&"data source utho_account".to_string()));
    }
}
