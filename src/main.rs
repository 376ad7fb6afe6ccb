use anyhow::{anyhow, Result};
use clap::{Arg, Command};
use etherscan_gas::{
    config::Config,
    ethereum::{utils, GasReport},
    EtherscanClient,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let _ = dotenv::dotenv();

    let matches = Command::new("gas-spent")
        .version("0.1.0")
        .about("Total the gas fees an Ethereum address has paid, using the Etherscan API")
        .arg(
            Arg::new("address")
                .value_name("ADDRESS")
                .help("Wallet address to inspect")
                .required_unless_present_any(["generate-config", "config-path"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to configuration file"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Etherscan API key (overrides config and ETHERSCAN_API_KEY)"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Etherscan API endpoint"),
        )
        .arg(
            Arg::new("chain-id")
                .long("chain-id")
                .value_name("ID")
                .value_parser(clap::value_parser!(u64))
                .help("Chain id passed to the v2 API (1 = Ethereum mainnet)"),
        )
        .arg(
            Arg::new("max-pages")
                .long("max-pages")
                .value_name("N")
                .value_parser(clap::value_parser!(u32))
                .help("Maximum txlist pages to fetch, 0 for no limit"),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .value_name("DIGITS")
                .value_parser(clap::value_parser!(usize))
                .help("Decimal places for the ether amount"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the report as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .help("Generate a sample configuration file and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .help("Print the default configuration file path and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("generate-config") {
        println!("{}", Config::generate_sample());
        return Ok(());
    }

    if matches.get_flag("config-path") {
        match Config::default_config_path() {
            Ok(path) => {
                println!("{}", path.display());
                return Ok(());
            }
            Err(e) => {
                error!("Could not determine default config path: {}", e);
                return Err(e);
            }
        }
    }

    let config_path = matches.get_one::<String>("config").map(|s| s.as_str());
    let mut config = Config::load_or_default(config_path).await?;

    // Command line beats file and environment
    if let Some(api_key) = matches.get_one::<String>("api-key") {
        config.explorer.api_key = Some(api_key.clone());
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.explorer.base_url = base_url.clone();
    }
    if let Some(chain_id) = matches.get_one::<u64>("chain-id") {
        config.explorer.chain_id = *chain_id;
    }
    if let Some(max_pages) = matches.get_one::<u32>("max-pages") {
        config.explorer.max_pages = *max_pages;
    }
    if let Some(precision) = matches.get_one::<usize>("precision") {
        config.display.precision = *precision;
    }

    let address = matches
        .get_one::<String>("address")
        .ok_or_else(|| anyhow!("ADDRESS is required"))?;
    let address = utils::validate_address(address)?;
    // Etherscan matches addresses case-insensitively; lower-case keeps logs uniform
    let address = format!("{:#x}", address);

    let client = EtherscanClient::new(config.explorer.client_config())
        .map_err(|e| anyhow!(utils::interpret_api_error(&e.to_string())))?;

    info!(
        "Fetching transactions for {} from {} (chain {})",
        address,
        client.base_url(),
        client.chain_id()
    );

    let transactions = match client.get_all_transactions_from_wallet(&address).await {
        Ok(transactions) => transactions,
        Err(e) => {
            error!("Failed to fetch transactions: {}", e);
            return Err(anyhow!(utils::interpret_api_error(&e.to_string())));
        }
    };

    let report = GasReport::new(&address, &transactions, config.display.precision);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Retrieved {} transactions", report.transactions);
        println!("Successful transactions: {}", report.successful);
        println!("Wei spent:   {}", report.wei_spent);
        println!("Gwei spent:  {}", report.gwei_spent);
        println!("Ether spent: {}", report.ether_spent);
    }

    Ok(())
}
