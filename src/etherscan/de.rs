//! Serde helpers for the decimal strings Etherscan uses for every number.

use alloy::primitives::U256;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

/// Etherscan encodes numbers as strings, but be lenient with bare JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Text(String),
    Unsigned(u64),
    Float(f64),
}

fn parse_u256<E: de::Error>(raw: &str) -> Result<U256, E> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(raw, 10)
        .map_err(|e| E::custom(format!("invalid decimal integer '{}': {}", raw, e)))
}

pub fn decimal_u256<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
    match Numeric::deserialize(deserializer)? {
        Numeric::Text(s) => parse_u256(&s),
        Numeric::Unsigned(n) => Ok(U256::from(n)),
        Numeric::Float(f) => Err(de::Error::custom(format!(
            "expected an integer, found {}",
            f
        ))),
    }
}

pub fn decimal_opt_u256<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<U256>, D::Error> {
    match Option::<Numeric>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Numeric::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Numeric::Text(s)) => parse_u256(&s).map(Some),
        Some(Numeric::Unsigned(n)) => Ok(Some(U256::from(n))),
        Some(Numeric::Float(f)) => Err(de::Error::custom(format!(
            "expected an integer, found {}",
            f
        ))),
    }
}

/// Writes the decimal string Etherscan sends, so records read back through
/// [`decimal_u256`]. The default `U256` encoding is `0x` hex.
pub fn serialize_decimal_u256<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn serialize_decimal_opt_u256<S: Serializer>(
    value: &Option<U256>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_none(),
    }
}

pub fn decimal_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match Numeric::deserialize(deserializer)? {
        Numeric::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| de::Error::custom(format!("invalid u64 '{}': {}", s, e))),
        Numeric::Unsigned(n) => Ok(n),
        Numeric::Float(f) => Err(de::Error::custom(format!(
            "expected an integer, found {}",
            f
        ))),
    }
}

/// Gas tracker prices are gwei with a fractional part ("0.512345").
pub fn decimal_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Numeric::deserialize(deserializer)? {
        Numeric::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid decimal '{}': {}", s, e))),
        Numeric::Unsigned(n) => Ok(n as f64),
        Numeric::Float(f) => Ok(f),
    }
}

pub fn decimal_opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<Numeric>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Numeric::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Numeric::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid decimal '{}': {}", s, e))),
        Some(Numeric::Unsigned(n)) => Ok(Some(n as f64)),
        Some(Numeric::Float(f)) => Ok(Some(f)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "decimal_u256")]
        wei: U256,
        #[serde(deserialize_with = "decimal_u64")]
        block: u64,
        #[serde(deserialize_with = "decimal_f64")]
        gwei: f64,
        #[serde(default, deserialize_with = "decimal_opt_u256")]
        limit: Option<U256>,
    }

    #[test]
    fn test_decimal_strings() {
        let sample: Sample = serde_json::from_str(
            r#"{"wei":"121000000000000000000000","block":"19000000","gwei":"0.75","limit":""}"#,
        )
        .unwrap();

        assert_eq!(
            sample.wei,
            U256::from(121_000u128 * 10u128.pow(18))
        );
        assert_eq!(sample.block, 19_000_000);
        assert_eq!(sample.gwei, 0.75);
        assert_eq!(sample.limit, None);
    }

    #[test]
    fn test_bare_numbers_and_missing_optional() {
        let sample: Sample =
            serde_json::from_str(r#"{"wei":42,"block":7,"gwei":12}"#).unwrap();

        assert_eq!(sample.wei, U256::from(42u64));
        assert_eq!(sample.block, 7);
        assert_eq!(sample.gwei, 12.0);
        assert_eq!(sample.limit, None);
    }

    #[derive(serde::Serialize, Deserialize)]
    struct Amounts {
        #[serde(
            deserialize_with = "decimal_u256",
            serialize_with = "serialize_decimal_u256"
        )]
        wei: U256,
        #[serde(
            default,
            deserialize_with = "decimal_opt_u256",
            serialize_with = "serialize_decimal_opt_u256"
        )]
        limit: Option<U256>,
    }

    #[test]
    fn test_serializes_decimal_strings() {
        let amounts = Amounts {
            wei: U256::MAX,
            limit: Some(U256::from(30_000_000u64)),
        };

        let value = serde_json::to_value(&amounts).unwrap();
        assert_eq!(value["wei"], U256::MAX.to_string());
        assert_eq!(value["limit"], "30000000");

        let back: Amounts = serde_json::from_value(value).unwrap();
        assert_eq!(back.wei, U256::MAX);
        assert_eq!(back.limit, Some(U256::from(30_000_000u64)));

        let empty = Amounts {
            wei: U256::ZERO,
            limit: None,
        };
        let value = serde_json::to_value(&empty).unwrap();
        assert_eq!(value, serde_json::json!({ "wei": "0", "limit": null }));
        let back: Amounts = serde_json::from_value(value).unwrap();
        assert_eq!(back.limit, None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Sample>(
            r#"{"wei":"0x12","block":"1","gwei":"1"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<Sample>(
            r#"{"wei":"1","block":"-1","gwei":"1"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<Sample>(
            r#"{"wei":"1","block":"1","gwei":"fast"}"#
        )
        .is_err());
    }
}
