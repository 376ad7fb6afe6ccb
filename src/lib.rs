//! Etherscan API client plus wei/gwei/ether helpers for totalling the gas a
//! wallet has paid.

pub mod config;
pub mod ethereum;
pub mod etherscan;

pub use ethereum::gas::{calculate_gas_spent_wei, gas_cost_wei};
pub use etherscan::{ClientConfig, EtherscanClient, ExplorerError};
