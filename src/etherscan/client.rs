use alloy::primitives::U256;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::{
    de, AccountBalance, AverageGasPrice, BlockType, DailyGasUsage, ExplorerError, GasOracle,
    InternalTransaction, MinedBlock, NftTransfer, SortOrder, TokenTransfer, Transaction, TxQuery,
};

pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/v2/api";

/// Ethereum mainnet
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Largest `offset` Etherscan accepts for `txlist`.
pub const DEFAULT_PAGE_SIZE: u32 = 10_000;

pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Explicit client settings. The client never reads the environment itself.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    /// Falls back to [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,
    pub chain_id: u64,
    /// Records requested per page by [`EtherscanClient::get_all_transactions_from_wallet`]
    pub page_size: u32,
    /// Upper bound on pages fetched by one aggregate call, `None` for no bound
    pub max_pages: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            chain_id: DEFAULT_CHAIN_ID,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: Some(DEFAULT_MAX_PAGES),
        }
    }
}

impl ClientConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

/// Response envelope shared by every Etherscan action
#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: Value,
}

/// Typed client for the Etherscan HTTP API
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    client: Client,
    api_key: String,
    base_url: String,
    chain_id: u64,
    page_size: u32,
    max_pages: Option<u32>,
}

impl EtherscanClient {
    pub fn new(config: ClientConfig) -> Result<Self, ExplorerError> {
        let api_key = config
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ExplorerError::MissingApiKey)?;

        let base_url = config
            .base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url,
            chain_id: config.chain_id,
            page_size: config.page_size.max(1),
            max_pages: config.max_pages,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Issue one GET and return the envelope's `result` untouched.
    async fn fetch_from_etherscan(
        &self,
        module: &'static str,
        action: &'static str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<Value, ExplorerError> {
        debug!("Etherscan request {}/{}", module, action);

        params.push(("module", module.to_string()));
        params.push(("action", action.to_string()));
        params.push(("tag", "latest".to_string()));
        params.push(("apikey", self.api_key.clone()));
        params.push(("chainid", self.chain_id.to_string()));

        let body = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // A 2xx body without the envelope shape is a decode error
        let envelope: Envelope = serde_json::from_str(&body)
            .map_err(|source| ExplorerError::Decode { action, source })?;

        if envelope.status != "1" {
            let detail = match envelope.result {
                Value::String(text) if !text.is_empty() && text != envelope.message => Some(text),
                _ => None,
            };
            debug!(
                "Etherscan {}/{} failed: {} {:?}",
                module, action, envelope.message, detail
            );
            return Err(ExplorerError::Api {
                message: envelope.message,
                detail,
            });
        }

        Ok(envelope.result)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        module: &'static str,
        action: &'static str,
        params: Vec<(&'static str, String)>,
    ) -> Result<T, ExplorerError> {
        let result = self.fetch_from_etherscan(module, action, params).await?;
        serde_json::from_value(result).map_err(|source| ExplorerError::Decode { action, source })
    }

    /// Run any module/action and hand back the raw `result` payload.
    pub async fn query_raw(
        &self,
        module: &'static str,
        action: &'static str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value, ExplorerError> {
        self.fetch_from_etherscan(module, action, params).await
    }

    /// Every normal transaction of `address`, oldest first.
    ///
    /// Pages through `txlist` with the configured page size until a page comes
    /// back short. Any failure aborts the whole call.
    pub async fn get_all_transactions_from_wallet(
        &self,
        address: &str,
    ) -> Result<Vec<Transaction>, ExplorerError> {
        let mut all_transactions = Vec::new();
        let mut page: u32 = 1;

        loop {
            if let Some(max_pages) = self.max_pages {
                if page > max_pages {
                    return Err(ExplorerError::PageLimitExceeded { max_pages });
                }
            }

            let query = TxQuery::default()
                .page(page)
                .offset(self.page_size)
                .sort(SortOrder::Asc);
            let transactions = self.get_transaction_list(address, query).await?;
            let fetched = transactions.len();
            all_transactions.extend(transactions);

            debug!(
                "Fetched page {} for {} ({} records, {} total)",
                page,
                address,
                fetched,
                all_transactions.len()
            );

            if fetched < self.page_size as usize {
                break;
            }

            page += 1;
        }

        info!(
            "Retrieved {} transactions for {} over {} page(s)",
            all_transactions.len(),
            address,
            page
        );
        Ok(all_transactions)
    }

    pub async fn get_transaction_list(
        &self,
        address: &str,
        query: TxQuery,
    ) -> Result<Vec<Transaction>, ExplorerError> {
        let mut params = vec![("address", address.to_string())];
        params.extend(query.params());
        self.fetch("account", "txlist", params).await
    }

    pub async fn get_internal_transactions(
        &self,
        address: &str,
        query: TxQuery,
    ) -> Result<Vec<InternalTransaction>, ExplorerError> {
        let mut params = vec![("address", address.to_string())];
        params.extend(query.params());
        self.fetch("account", "txlistinternal", params).await
    }

    /// ERC-20 transfers, optionally narrowed to one token contract.
    pub async fn get_erc20_transfers(
        &self,
        address: &str,
        contract_address: Option<&str>,
        query: TxQuery,
    ) -> Result<Vec<TokenTransfer>, ExplorerError> {
        let params = token_params(address, contract_address, query);
        self.fetch("account", "tokentx", params).await
    }

    /// ERC-721 transfers, optionally narrowed to one collection.
    pub async fn get_erc721_transfers(
        &self,
        address: &str,
        contract_address: Option<&str>,
        query: TxQuery,
    ) -> Result<Vec<NftTransfer>, ExplorerError> {
        let params = token_params(address, contract_address, query);
        self.fetch("account", "tokennfttx", params).await
    }

    pub async fn get_mined_blocks(
        &self,
        address: &str,
        block_type: BlockType,
    ) -> Result<Vec<MinedBlock>, ExplorerError> {
        let params = vec![
            ("address", address.to_string()),
            ("blocktype", block_type.as_str().to_string()),
        ];
        self.fetch("account", "getminedblocks", params).await
    }

    /// Balance of one address in wei.
    pub async fn get_balance(&self, address: &str) -> Result<U256, ExplorerError> {
        #[derive(Deserialize)]
        struct Balance(#[serde(deserialize_with = "de::decimal_u256")] U256);

        let params = vec![("address", address.to_string())];
        let Balance(wei) = self.fetch("account", "balance", params).await?;
        Ok(wei)
    }

    pub async fn get_balances<S: AsRef<str>>(
        &self,
        addresses: &[S],
    ) -> Result<Vec<AccountBalance>, ExplorerError> {
        let address_list = addresses
            .iter()
            .map(|address| address.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        let params = vec![("address", address_list)];
        self.fetch("account", "balancemulti", params).await
    }

    pub async fn get_gas_oracle(&self) -> Result<GasOracle, ExplorerError> {
        self.fetch("gastracker", "gasoracle", Vec::new()).await
    }

    pub async fn get_daily_gas_usage(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<DailyGasUsage>, ExplorerError> {
        let params = vec![("date", date.format("%Y-%m-%d").to_string())];
        self.fetch("gastracker", "dailygasusage", params).await
    }

    pub async fn get_historical_gas_price(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AverageGasPrice>, ExplorerError> {
        let params = vec![("date", date.format("%Y-%m-%d").to_string())];
        self.fetch("gastracker", "averagegasprice", params).await
    }

    /// Estimated seconds until a transaction paying `gas_price` wei is confirmed.
    pub async fn get_estimated_confirmation_time(
        &self,
        gas_price: U256,
    ) -> Result<u64, ExplorerError> {
        #[derive(Deserialize)]
        struct Seconds(#[serde(deserialize_with = "de::decimal_u64")] u64);

        let params = vec![("gasprice", gas_price.to_string())];
        let Seconds(seconds) = self.fetch("gastracker", "gasestimate", params).await?;
        Ok(seconds)
    }
}

fn token_params(
    address: &str,
    contract_address: Option<&str>,
    query: TxQuery,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("address", address.to_string())];
    if let Some(contract_address) = contract_address {
        params.push(("contractaddress", contract_address.to_string()));
    }
    params.extend(query.params());
    params
}
