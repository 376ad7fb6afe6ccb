//! Conversions between wei, gwei and ether.
//!
//! Integer conversions are exact (multiplications saturate at `U256::MAX`).
//! Anything returning `f64` is an approximation meant for display only.

use alloy::primitives::{
    utils::{format_ether as format_ether_units, parse_ether as parse_ether_units, UnitsError},
    U256,
};

/// 10^9 wei
pub const WEI_PER_GWEI: U256 = U256::from_limbs([1_000_000_000, 0, 0, 0]);

/// 10^18 wei
pub const WEI_PER_ETHER: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

pub const DEFAULT_PRECISION: usize = 6;

/// Nearest-ish `f64` for a 256 bit integer. Exact below 2^53.
fn u256_to_f64(value: U256) -> f64 {
    value
        .as_limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, &limb| acc * 18_446_744_073_709_551_616.0 + limb as f64)
}

pub fn wei_to_ether(wei: U256) -> f64 {
    u256_to_f64(wei) / 1e18
}

pub fn ether_to_wei(ether: U256) -> U256 {
    ether.saturating_mul(WEI_PER_ETHER)
}

/// Truncates any sub-gwei remainder.
pub fn wei_to_gwei(wei: U256) -> U256 {
    wei / WEI_PER_GWEI
}

pub fn gwei_to_wei(gwei: U256) -> U256 {
    gwei.saturating_mul(WEI_PER_GWEI)
}

pub fn gwei_to_ether(gwei: U256) -> f64 {
    u256_to_f64(gwei) / 1e9
}

pub fn ether_to_gwei(ether: U256) -> U256 {
    wei_to_gwei(ether_to_wei(ether))
}

/// Ether amount with a fixed number of decimals, e.g. `"0.000121"`.
pub fn format_ether(wei: U256, precision: usize) -> String {
    format!("{:.*}", precision, wei_to_ether(wei))
}

/// Lossless decimal rendering of a wei amount in ether.
pub fn format_ether_exact(wei: U256) -> String {
    format_ether_units(wei)
}

/// Parse a decimal ether string such as `"1.5"` into wei without rounding.
pub fn parse_ether(ether: &str) -> Result<U256, UnitsError> {
    parse_ether_units(ether.trim())
}
