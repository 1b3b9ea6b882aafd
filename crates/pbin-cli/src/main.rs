//! pbin: encrypt pastes for a PrivateBin v2 server
//!
//! Commands:
//!   encrypt [--file F] [--expire E]   - encrypt stdin or a file, print body + key
//!   filler --size N [--seed S]        - encrypt generated filler text (load testing)
//!   request [--file F] [--expire E]   - print the HTTP request a client would submit
//!   link --id ID --key KEY            - print the share link for a stored paste
//!   config show                       - display current configuration
//!
//! Submitting the request is left to an HTTP client; pbin never talks to
//! the server and the key never leaves this process except on stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use pbin_core::config::PbinConfig;
use pbin_core::paste::{delete_link, share_link, SubmitRequest};
use pbin_crypto::{FillerGenerator, PasteEncryptor, ShareableResult};

// ── CLI structure ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "pbin",
    version,
    about = "PrivateBin paste encryption",
    long_about = "pbin: encrypt text client-side into a PrivateBin v2 paste body and share key"
)]
struct Cli {
    /// Path to pbin configuration file
    #[arg(long, short = 'c', env = "PBIN_CONFIG", default_value = "/etc/pbin/config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, env = "PBIN_LOG")]
    log: Option<String>,

    /// Log format; overrides the config file
    #[arg(long, env = "PBIN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, ValueEnum)]
enum LogFormat {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt a paste and print the request body and the share key as JSON
    Encrypt {
        /// Read the paste from this file instead of stdin
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
        /// Expiry policy (e.g. 5min, 1hour, 1day, 1week, never)
        #[arg(long, short = 'e')]
        expire: Option<String>,
    },

    /// Encrypt generated filler text, for load-testing a server
    Filler {
        /// Filler length in characters (default: config filler.size)
        #[arg(long, short = 's')]
        size: Option<usize>,
        /// Seed for reproducible filler text (default: config filler.seed)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, short = 'e')]
        expire: Option<String>,
    },

    /// Print the HTTP request that submits an encrypted paste
    Request {
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
        #[arg(long, short = 'e')]
        expire: Option<String>,
    },

    /// Print the share link for a paste the server has accepted
    Link {
        /// Paste id returned by the server
        #[arg(long)]
        id: String,
        /// Base58 key printed by `pbin encrypt`
        #[arg(long)]
        key: String,
        /// Server URL (default: config paste.server_url)
        #[arg(long)]
        server: Option<String>,
        /// Delete token returned by the server
        #[arg(long)]
        delete_token: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the active configuration (merged defaults + config file)
    Show,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PbinConfig::load(&cli.config)
        .with_context(|| format!("loading config: {}", cli.config.display()))?;

    init_logging(&cli, &config);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "pbin starting"
    );

    let encryptor = PasteEncryptor::new().with_default_expire(config.paste.default_expire.clone());

    match cli.command {
        Commands::Encrypt { file, expire } => {
            let payload = read_payload(file.as_deref())?;
            let result = encryptor.encrypt(&payload, expire.as_deref().unwrap_or_default())?;
            print_result(&result)
        }
        Commands::Filler { size, seed, expire } => {
            let size = size.unwrap_or(config.filler.size);
            let mut filler = match seed.or(config.filler.seed) {
                Some(seed) => FillerGenerator::from_seed(seed),
                None => FillerGenerator::from_entropy(),
            };
            let result = encryptor.encrypt_random_payload(
                &mut filler,
                size,
                expire.as_deref().unwrap_or_default(),
            )?;
            print_result(&result)
        }
        Commands::Request { file, expire } => {
            let payload = read_payload(file.as_deref())?;
            let result = encryptor.encrypt(&payload, expire.as_deref().unwrap_or_default())?;
            cmd_request(&config, &result);
            Ok(())
        }
        Commands::Link { id, key, server, delete_token } => {
            let server = server.unwrap_or_else(|| config.paste.server_url.clone());
            println!("{}", share_link(&server, &id, &key));
            if let Some(token) = delete_token {
                println!("{}", delete_link(&server, &id, &token));
            }
            Ok(())
        }
        Commands::Config { action: ConfigAction::Show } => cmd_config_show(&config, &cli.config),
    }
}

fn init_logging(cli: &Cli, config: &PbinConfig) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = cli.log.as_deref().unwrap_or(config.log.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let json = match &cli.log_format {
        Some(format) => matches!(format, LogFormat::Json),
        None => config.log.format == "json",
    };

    // stdout carries the paste output; logs go to stderr
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Read the paste body from `file`, or from stdin when no file is given.
fn read_payload(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading paste: {}", path.display())),
        None => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .context("reading paste from stdin")?;
            Ok(payload)
        }
    }
}

fn print_result(result: &ShareableResult) -> Result<()> {
    let out = serde_json::json!({
        "body": result.body,
        "key": result.key(),
    });
    println!("{}", serde_json::to_string_pretty(&out).context("serializing result")?);
    Ok(())
}

// ── `pbin request` ────────────────────────────────────────────────────────────

fn render_request(server_url: &str, request: &SubmitRequest) -> String {
    let mut out = format!("POST {server_url}\n");
    for (name, value) in request.headers() {
        out.push_str(&format!("{name}: {value}\n"));
    }
    out.push('\n');
    out.push_str(&request.body);
    out
}

fn cmd_request(config: &PbinConfig, result: &ShareableResult) {
    let request = SubmitRequest::new(result.body.clone());
    println!("{}", render_request(&config.paste.server_url, &request));
    eprintln!("# key (append to the paste URL as #fragment): {}", result.key());
}

// ── `pbin config show` ────────────────────────────────────────────────────────

fn cmd_config_show(config: &PbinConfig, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("# Configuration from: {}", config_path.display());
    } else {
        println!("# Configuration: defaults (no file at {})", config_path.display());
    }
    println!();
    let rendered = toml::to_string_pretty(config).context("serializing config to TOML")?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_encrypt_args() {
        let cli = Cli::try_parse_from(["pbin", "encrypt", "--expire", "1week", "-f", "note.txt"]).unwrap();
        match cli.command {
            Commands::Encrypt { file, expire } => {
                assert_eq!(file, Some(PathBuf::from("note.txt")));
                assert_eq!(expire.as_deref(), Some("1week"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn read_payload_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("paste.txt");
        std::fs::write(&path, "hello from a file\n").unwrap();

        assert_eq!(read_payload(Some(&path)).unwrap(), "hello from a file\n");
    }

    #[test]
    fn read_payload_missing_file() {
        let err = read_payload(Some(Path::new("/nonexistent/pbin/paste.txt"))).unwrap_err();
        assert!(err.to_string().contains("reading paste"));
    }

    #[test]
    fn request_rendering() {
        let request = SubmitRequest::new(r#"{"v":2}"#);
        let rendered = render_request("https://privatebin.net", &request);

        assert_eq!(
            rendered,
            "POST https://privatebin.net\n\
             Content-Type: application/x-www-form-urlencoded\n\
             Content-Length: 7\n\
             X-Requested-With: JSONHttpRequest\n\
             \n\
             {\"v\":2}"
        );
    }
}
