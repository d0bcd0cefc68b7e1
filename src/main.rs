mod config;

use config::{CompilerConfig, Config, ConfigError, Endpoint, Format, NetworkConfig};
use serde::Serialize;
use std::{collections::BTreeMap, env, path::Path, process::ExitCode};
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";
const DEFAULT_NETWORK: &str = "development";
const DEFAULT_COMPILER: &str = "solc";

/// Command-line options, all given as `--key=value`.
struct Args {
    config: Option<String>,
    network: String,
    compiler: String,
    chain_id: Option<String>,
    dump: bool,
}

/// Profiles printed to stdout for the consuming tool.
#[derive(Serialize)]
struct Selection<'a> {
    network: BTreeMap<&'a str, &'a NetworkConfig>,
    compiler: BTreeMap<&'a str, &'a CompilerConfig>,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: None,
        network: DEFAULT_NETWORK.to_string(),
        compiler: DEFAULT_COMPILER.to_string(),
        chain_id: None,
        dump: false,
    };

    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            args.config = Some(path.to_string());
        } else if let Some(name) = arg.strip_prefix("--network=") {
            args.network = name.to_string();
        } else if let Some(name) = arg.strip_prefix("--compiler=") {
            args.compiler = name.to_string();
        } else if let Some(id) = arg.strip_prefix("--chain-id=") {
            args.chain_id = Some(id.to_string());
        } else if arg == "--dump" {
            args.dump = true;
        } else {
            warn!(arg = %arg, "Ignoring unknown argument");
        }
    }

    args
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // Logs go to stderr so stdout stays machine-readable.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the requested file, or the built-in document when none is given
/// and the default path is missing.
fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Config::load(DEFAULT_CONFIG_PATH),
        None => {
            info!(path = DEFAULT_CONFIG_PATH, "Config file not found, using built-in defaults");
            Ok(Config::development())
        }
    }
}

fn run(args: &Args) -> Result<(), ConfigError> {
    let config = load_config(args.config.as_deref())?;

    for (name, network) in config.networks() {
        debug!(
            network = %name,
            network_id = %network.network_id,
            endpoint = ?network.endpoint().map(|e| e.to_string()),
            "Network available"
        );
    }

    for (name, compiler) in config.compilers() {
        debug!(
            compiler = %name,
            version = %compiler.version,
            docker = compiler.uses_docker(),
            "Compiler available"
        );
    }

    if args.dump {
        print!("{}", config.to_string_as(Format::Yaml)?);
        return Ok(());
    }

    let network = config.get_network(&args.network)?;
    let compiler = config.get_compiler(&args.compiler)?;

    match network.endpoint() {
        Some(Endpoint::Provider(provider)) if provider.mnemonic.is_empty() => {
            warn!(network = %args.network, "Provider has no mnemonic; transactions cannot be signed")
        }
        Some(endpoint) => info!(network = %args.network, endpoint = %endpoint, "Network selected"),
        None => warn!(network = %args.network, "Network has no endpoint"),
    }

    if let Some(ref raw) = args.chain_id {
        let id: u64 = raw
            .parse()
            .map_err(|_| ConfigError::Validation(format!("invalid --chain-id: {}", raw)))?;
        if network.network_id.matches(id) {
            info!(chain_id = id, network_id = %network.network_id, "Chain id accepted");
        } else {
            warn!(chain_id = id, network_id = %network.network_id, "Chain id rejected by network");
        }
    }

    info!(
        compiler = %args.compiler,
        version = %compiler.version,
        docker = compiler.uses_docker(),
        optimizer_runs = ?compiler.optimizer_runs(),
        "Compiler selected"
    );

    let selected = Selection {
        network: BTreeMap::from([(args.network.as_str(), network)]),
        compiler: BTreeMap::from([(args.compiler.as_str(), compiler)]),
    };
    println!("{}", serde_json::to_string_pretty(&selected)?);

    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing(env::var("LOG_LEVEL").ok().as_deref());

    let args = parse_args();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
