pub mod client;
pub mod de;
pub mod error;

pub use client::{ClientConfig, EtherscanClient};
pub use error::ExplorerError;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Sort order accepted by the account list actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Block kind for `getminedblocks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Blocks,
    Uncles,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Blocks => "blocks",
            BlockType::Uncles => "uncles",
        }
    }
}

/// Block range and paging for the account list actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxQuery {
    pub start_block: u64,
    pub end_block: u64,
    pub page: u32,
    /// Records per page
    pub offset: u32,
    pub sort: SortOrder,
}

impl Default for TxQuery {
    fn default() -> Self {
        Self {
            start_block: 0,
            end_block: 99_999_999,
            page: 1,
            offset: 100,
            sort: SortOrder::Asc,
        }
    }
}

impl TxQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn blocks(mut self, start_block: u64, end_block: u64) -> Self {
        self.start_block = start_block;
        self.end_block = end_block;
        self
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startblock", self.start_block.to_string()),
            ("endblock", self.end_block.to_string()),
            ("page", self.page.to_string()),
            ("offset", self.offset.to_string()),
            ("sort", self.sort.as_str().to_string()),
        ]
    }
}

/// Normal transaction from `account/txlist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, deserialize_with = "de::decimal_u64")]
    pub block_number: u64,
    #[serde(default, rename = "timeStamp", deserialize_with = "de::decimal_u64")]
    pub timestamp: u64,
    #[serde(default)]
    pub hash: String,
    #[serde(default, deserialize_with = "de::decimal_u64")]
    pub nonce: u64,
    #[serde(default)]
    pub block_hash: String,
    #[serde(default, deserialize_with = "de::decimal_u64")]
    pub transaction_index: u64,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub value: U256,
    /// Gas limit
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub gas: U256,
    /// Wei per unit of gas
    #[serde(deserialize_with = "de::decimal_u256", serialize_with = "de::serialize_decimal_u256")]
    pub gas_price: U256,
    /// "0" when the transaction succeeded
    pub is_error: String,
    #[serde(default, rename = "txreceipt_status")]
    pub receipt_status: String,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub cumulative_gas_used: U256,
    #[serde(deserialize_with = "de::decimal_u256", serialize_with = "de::serialize_decimal_u256")]
    pub gas_used: U256,
    #[serde(default, deserialize_with = "de::decimal_u64")]
    pub confirmations: u64,
    #[serde(default)]
    pub method_id: String,
    #[serde(default)]
    pub function_name: String,
}

impl Transaction {
    pub fn succeeded(&self) -> bool {
        self.is_error == "0"
    }
}

/// Internal (trace) transaction from `account/txlistinternal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTransaction {
    #[serde(deserialize_with = "de::decimal_u64")]
    pub block_number: u64,
    #[serde(default, rename = "timeStamp", deserialize_with = "de::decimal_u64")]
    pub timestamp: u64,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub value: U256,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub input: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub gas: U256,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub gas_used: U256,
    #[serde(default)]
    pub trace_id: String,
    #[serde(default)]
    pub is_error: String,
    #[serde(default)]
    pub err_code: String,
}

/// ERC-20 transfer event from `account/tokentx`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    #[serde(deserialize_with = "de::decimal_u64")]
    pub block_number: u64,
    #[serde(default, rename = "timeStamp", deserialize_with = "de::decimal_u64")]
    pub timestamp: u64,
    pub hash: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    pub contract_address: String,
    /// Raw amount in the token's smallest unit
    #[serde(deserialize_with = "de::decimal_u256", serialize_with = "de::serialize_decimal_u256")]
    pub value: U256,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub token_symbol: String,
    #[serde(default, deserialize_with = "de::decimal_u64")]
    pub token_decimal: u64,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub gas: U256,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub gas_price: U256,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub gas_used: U256,
    #[serde(default, deserialize_with = "de::decimal_u64")]
    pub confirmations: u64,
}

/// ERC-721 transfer event from `account/tokennfttx`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTransfer {
    #[serde(deserialize_with = "de::decimal_u64")]
    pub block_number: u64,
    #[serde(default, rename = "timeStamp", deserialize_with = "de::decimal_u64")]
    pub timestamp: u64,
    pub hash: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    pub contract_address: String,
    #[serde(
        rename = "tokenID",
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub token_id: U256,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub token_symbol: String,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub gas_price: U256,
    #[serde(
        default,
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub gas_used: U256,
}

/// Block validated by an address, from `account/getminedblocks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinedBlock {
    #[serde(deserialize_with = "de::decimal_u64")]
    pub block_number: u64,
    #[serde(default, rename = "timeStamp", deserialize_with = "de::decimal_u64")]
    pub timestamp: u64,
    #[serde(deserialize_with = "de::decimal_u256", serialize_with = "de::serialize_decimal_u256")]
    pub block_reward: U256,
}

/// One entry of `account/balancemulti`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account: String,
    /// Wei
    #[serde(deserialize_with = "de::decimal_u256", serialize_with = "de::serialize_decimal_u256")]
    pub balance: U256,
}

/// Gas price snapshot from `gastracker/gasoracle`, prices in gwei.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasOracle {
    #[serde(rename = "LastBlock", deserialize_with = "de::decimal_u64")]
    pub last_block: u64,
    #[serde(rename = "SafeGasPrice", deserialize_with = "de::decimal_f64")]
    pub safe_gas_price: f64,
    #[serde(rename = "ProposeGasPrice", deserialize_with = "de::decimal_f64")]
    pub propose_gas_price: f64,
    #[serde(rename = "FastGasPrice", deserialize_with = "de::decimal_f64")]
    pub fast_gas_price: f64,
    #[serde(default, rename = "suggestBaseFee", deserialize_with = "de::decimal_opt_f64")]
    pub suggest_base_fee: Option<f64>,
    /// Comma separated ratios for the last few blocks
    #[serde(default, rename = "gasUsedRatio")]
    pub gas_used_ratio: String,
}

impl GasOracle {
    /// Parses `gas_used_ratio`, skipping entries that are not numbers.
    pub fn gas_used_ratios(&self) -> Vec<f64> {
        self.gas_used_ratio
            .split(',')
            .filter_map(|ratio| ratio.trim().parse::<f64>().ok())
            .collect()
    }
}

/// Daily gas statistics from `gastracker/dailygasusage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyGasUsage {
    #[serde(rename = "UTCDate")]
    pub utc_date: String,
    #[serde(default, rename = "unixTimeStamp", deserialize_with = "de::decimal_u64")]
    pub unix_timestamp: u64,
    #[serde(
        default,
        rename = "gasLimit",
        deserialize_with = "de::decimal_opt_u256",
        serialize_with = "de::serialize_decimal_opt_u256"
    )]
    pub gas_limit: Option<U256>,
    #[serde(
        default,
        rename = "gasUsed",
        deserialize_with = "de::decimal_opt_u256",
        serialize_with = "de::serialize_decimal_opt_u256"
    )]
    pub gas_used: Option<U256>,
}

/// Daily average gas price from `gastracker/averagegasprice`, in wei.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageGasPrice {
    #[serde(rename = "UTCDate")]
    pub utc_date: String,
    #[serde(default, rename = "unixTimeStamp", deserialize_with = "de::decimal_u64")]
    pub unix_timestamp: u64,
    #[serde(
        rename = "avgGasPrice_Wei",
        deserialize_with = "de::decimal_u256",
        serialize_with = "de::serialize_decimal_u256"
    )]
    pub avg_gas_price_wei: U256,
    #[serde(
        default,
        rename = "maxGasPrice_Wei",
        deserialize_with = "de::decimal_opt_u256",
        serialize_with = "de::serialize_decimal_opt_u256"
    )]
    pub max_gas_price_wei: Option<U256>,
    #[serde(
        default,
        rename = "minGasPrice_Wei",
        deserialize_with = "de::decimal_opt_u256",
        serialize_with = "de::serialize_decimal_opt_u256"
    )]
    pub min_gas_price_wei: Option<U256>,
}
