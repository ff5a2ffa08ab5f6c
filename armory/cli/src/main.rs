//! Armory CLI - query the World of Warcraft profile and PvP APIs

mod config;

use armory_lib::{
    ErrorMapping, Operation, OperationParams, Region, WowClient, WowError, build_api_url,
};
use clap::{Args, Parser, Subcommand};
use strum::IntoEnumIterator;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use config::CliError;

#[derive(Parser)]
#[command(name = "armory", version)]
#[command(about = "Query World of Warcraft character and PvP data", long_about = None)]
struct Cli {
    /// API region (us, eu, kr, tw)
    #[arg(
        long,
        env = "WOW_REGION",
        default_value = "eu",
        value_parser = parse_region,
        global = true
    )]
    region: Region,

    /// Response locale, e.g. en_GB or es_ES
    #[arg(long, env = "WOW_LOCALE", default_value = "en_GB", global = true)]
    locale: String,

    /// OAuth client id
    #[arg(long, env = "BLIZZARD_CLIENT_ID", hide_env_values = true, global = true)]
    client_id: Option<String>,

    /// OAuth client secret
    #[arg(long, env = "BLIZZARD_CLIENT_SECRET", hide_env_values = true, global = true)]
    client_secret: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every operation and the parameters it needs
    Operations,

    /// Print the request URL for an operation without sending it
    Url {
        #[command(flatten)]
        target: OperationArgs,
    },

    /// Run an operation and print the JSON response
    Call {
        #[command(flatten)]
        target: OperationArgs,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Args)]
struct OperationArgs {
    /// Operation name, e.g. character-profile (see `armory operations`)
    #[arg(value_name = "OPERATION", value_parser = parse_operation)]
    operation: Operation,

    /// Realm slug
    #[arg(long)]
    realm: Option<String>,

    /// Character name
    #[arg(long)]
    character: Option<String>,

    /// PvP bracket, e.g. 3v3 or rbg
    #[arg(long)]
    bracket: Option<String>,

    /// PvP season id
    #[arg(long, allow_negative_numbers = true)]
    season: Option<i64>,
}

impl OperationArgs {
    fn params(&self) -> OperationParams {
        OperationParams {
            realm_slug: self.realm.clone(),
            character_name: self.character.clone(),
            bracket: self.bracket.clone(),
            season_id: self.season,
        }
    }
}

fn parse_region(value: &str) -> Result<Region, String> {
    value
        .parse()
        .map_err(|_| format!("unknown region '{value}' (expected us, eu, kr or tw)"))
}

fn parse_operation(value: &str) -> Result<Operation, String> {
    value
        .parse()
        .map_err(|_| format!("unknown operation '{value}' (run `armory operations`)"))
}

/// Initialize tracing subscriber with appropriate filter and format.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,armory_lib=info,armory=info".to_string(),
            2 => "info,armory_lib=debug,armory=debug".to_string(),
            _ => "debug,armory_lib=trace,armory=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn list_operations() {
    for op in Operation::iter() {
        let params: Vec<&str> = op
            .required_parameters()
            .iter()
            .map(|p| p.into())
            .collect();
        if params.is_empty() {
            println!("{op}");
        } else {
            println!("{:<34} --{}", op.name(), params.join(" --"));
        }
    }
}

fn print_url(cli: &Cli, target: &OperationArgs) -> Result<(), CliError> {
    let spec = target
        .operation
        .request_spec(cli.region, &target.params())
        .map_err(WowError::from)?;
    println!(
        "{}",
        build_api_url(cli.region, &spec.path, &spec.namespace, &cli.locale)
    );
    Ok(())
}

async fn call(cli: &Cli, target: &OperationArgs, compact: bool) -> Result<(), CliError> {
    let params = target.params();
    // Fail on missing parameters before touching credentials or the network.
    target
        .operation
        .request_spec(cli.region, &params)
        .map_err(WowError::from)?;

    let credentials =
        config::credentials(cli.client_id.as_deref(), cli.client_secret.as_deref())?;
    let client = WowClient::builder(cli.region, cli.locale.clone())
        .token_provider(credentials)
        .error_mapping(ErrorMapping::ByStatus)
        .build()?;

    tracing::info!(operation = %target.operation, region = %cli.region, "Calling API");
    let body = client.call(target.operation, &params).await?;

    let rendered = if compact {
        serde_json::to_string(&body)?
    } else {
        serde_json::to_string_pretty(&body)?
    };
    println!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json_logs);

    let result = match &cli.command {
        Commands::Operations => {
            list_operations();
            Ok(())
        }
        Commands::Url { target } => print_url(&cli, target),
        Commands::Call { target, compact } => call(&cli, target, *compact).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
