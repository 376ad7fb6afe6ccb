pub mod gas;
pub mod units;
pub mod utils;

use alloy::primitives::U256;
use serde::Serialize;

use crate::etherscan::Transaction;

/// Gas spent by one wallet, in every denomination the CLI prints.
#[derive(Debug, Clone, Serialize)]
pub struct GasReport {
    pub address: String,
    pub transactions: usize,
    pub successful: usize,
    pub wei_spent: String,
    pub gwei_spent: String,
    pub ether_spent: String,
}

impl GasReport {
    pub fn new(address: &str, transactions: &[Transaction], precision: usize) -> Self {
        let wei: U256 = gas::calculate_gas_spent_wei(transactions);

        Self {
            address: address.to_string(),
            transactions: transactions.len(),
            successful: transactions.iter().filter(|tx| tx.succeeded()).count(),
            wei_spent: wei.to_string(),
            gwei_spent: units::wei_to_gwei(wei).to_string(),
            ether_spent: units::format_ether(wei, precision),
        }
    }
}
