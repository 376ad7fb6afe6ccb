use alloy::primitives::Address;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Validates and normalizes an Ethereum address
pub fn validate_address(address: &str) -> Result<Address> {
    let address = address.trim();

    if address.is_empty() {
        return Err(anyhow!("Address cannot be empty"));
    }

    if !address.starts_with("0x") && !address.starts_with("0X") {
        return Err(anyhow!(
            "Invalid address format: '{}'. Ethereum addresses must start with '0x'",
            address
        ));
    }

    if address.len() != 42 {
        return Err(anyhow!(
            "Invalid address length: '{}'. Ethereum addresses must be exactly 42 characters (0x + 40 hex characters)",
            address
        ));
    }

    let hex_part = &address[2..];
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(anyhow!(
            "Invalid address format: '{}'. Contains non-hexadecimal characters",
            address
        ));
    }

    Address::from_str(address)
        .map_err(|e| anyhow!("Invalid Ethereum address: '{}'. Error: {}", address, e))
}

/// Turns the terse messages Etherscan returns into something actionable
pub fn interpret_api_error(error: &str) -> String {
    let lowered = error.to_lowercase();

    if lowered.contains("invalid api key") || lowered.contains("missing/invalid api key") {
        "API authentication error: Etherscan rejected the API key. Check the key in your config file or ETHERSCAN_API_KEY.".to_string()
    } else if lowered.contains("missing etherscan api key") {
        "No Etherscan API key configured. Pass --api-key, set ETHERSCAN_API_KEY or add api_key to the [explorer] section of the config file.".to_string()
    } else if lowered.contains("rate limit") {
        "Rate limit error: Too many requests to the Etherscan API. Wait a moment or use a key with a higher limit.".to_string()
    } else if lowered.contains("no transactions found") {
        "No transactions found for this address.".to_string()
    } else if lowered.contains("invalid address") {
        "Etherscan rejected the address. Make sure it is a 0x-prefixed 20 byte hex address.".to_string()
    } else if lowered.contains("pagination stopped") {
        format!(
            "{}. Raise max_pages in the config file or pass --max-pages 0 to disable the limit.",
            error
        )
    } else if lowered.contains("timed out") || lowered.contains("timeout") {
        "Network error: Request to the Etherscan API timed out. Try again in a few moments."
            .to_string()
    } else if lowered.contains("connection") || lowered.contains("dns") {
        "Network error: Cannot connect to the Etherscan API. Check your internet connection and base_url."
            .to_string()
    } else {
        error.to_string()
    }
}
