use alloy::primitives::U256;

use crate::etherscan::Transaction;

/// Fee paid by one transaction: gas used times gas price, in wei.
pub fn gas_cost_wei(tx: &Transaction) -> U256 {
    tx.gas_used.saturating_mul(tx.gas_price)
}

/// Total gas fees paid across `transactions`, in wei.
///
/// Only transactions whose error flag is exactly `"0"` are counted.
pub fn calculate_gas_spent_wei<'a, I>(transactions: I) -> U256
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|tx| tx.succeeded())
        .map(gas_cost_wei)
        .fold(U256::ZERO, |total, fee| total.saturating_add(fee))
}
