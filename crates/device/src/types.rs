//! Validated boundary types.
//!
//! Values of these types can only be constructed through validation, both
//! from Rust (`TryFrom<String>`) and from JSON (serde `try_from`), so
//! out-of-range input never reaches the registry.

use serde::{Deserialize, Serialize};
use sigchain_crypto::Algorithm;
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;

/// Maximum label length in Unicode code points.
pub const MAX_LABEL_CHARS: usize = 255;

/// Minimum transaction data length in Unicode code points.
pub const MIN_DATA_CHARS: usize = 2;

/// Maximum transaction data length in Unicode code points.
pub const MAX_DATA_CHARS: usize = 1024;

/// Human-readable device label, at most [`MAX_LABEL_CHARS`] code points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_from(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Label {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let length = value.chars().count();
        if length > MAX_LABEL_CHARS {
            return Err(ValidationError::LabelTooLong {
                length,
                max: MAX_LABEL_CHARS,
            });
        }
        Ok(Self(value))
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transaction payload, between [`MIN_DATA_CHARS`] and [`MAX_DATA_CHARS`]
/// code points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionData(String);

impl TransactionData {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_from(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TransactionData {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let length = value.chars().count();
        if !(MIN_DATA_CHARS..=MAX_DATA_CHARS).contains(&length) {
            return Err(ValidationError::DataSize {
                length,
                min: MIN_DATA_CHARS,
                max: MAX_DATA_CHARS,
            });
        }
        Ok(Self(value))
    }
}

impl From<TransactionData> for String {
    fn from(data: TransactionData) -> Self {
        data.0
    }
}

impl fmt::Display for TransactionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input for creating a device.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDeviceInput {
    pub key: Uuid,
    pub algorithm: Algorithm,
    #[serde(default)]
    pub label: Label,
}

/// Input for signing a transaction with an existing device.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTransactionInput {
    #[serde(rename = "deviceKey", alias = "deviceId")]
    pub device_key: Uuid,
    pub data: TransactionData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_label_limits_count_code_points() {
        assert!(Label::new("").is_ok());
        assert!(Label::new("a".repeat(255)).is_ok());
        assert!(Label::new("ü".repeat(255)).is_ok());
        assert_eq!(
            Label::new("a".repeat(256)).unwrap_err(),
            ValidationError::LabelTooLong {
                length: 256,
                max: 255
            }
        );
    }

    #[test]
    fn test_data_limits_count_code_points() {
        assert!(TransactionData::new("a").is_err());
        assert!(TransactionData::new("ab").is_ok());
        assert!(TransactionData::new("é").is_err());
        assert!(TransactionData::new("€".repeat(1024)).is_ok());
        assert!(TransactionData::new("x".repeat(1025)).is_err());
    }

    #[test]
    fn test_create_device_input_from_json() {
        let key = Uuid::new_v4();
        let json = format!(r#"{{"key":"{}","algorithm":"ECC","label":"Test Device"}}"#, key);

        let input: CreateDeviceInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.key, key);
        assert_eq!(input.algorithm, Algorithm::Ecc);
        assert_eq!(input.label.as_str(), "Test Device");
    }

    #[test]
    fn test_create_device_input_label_defaults_to_empty() {
        let json = format!(r#"{{"key":"{}","algorithm":"RSA"}}"#, Uuid::new_v4());

        let input: CreateDeviceInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.label, Label::default());
    }

    #[test]
    fn test_create_device_input_rejects_bad_algorithm() {
        let json = format!(r#"{{"key":"{}","algorithm":"DSA","label":"x"}}"#, Uuid::new_v4());
        assert!(serde_json::from_str::<CreateDeviceInput>(&json).is_err());
    }

    #[test]
    fn test_create_device_input_rejects_long_label() {
        let json = format!(
            r#"{{"key":"{}","algorithm":"ECC","label":"{}"}}"#,
            Uuid::new_v4(),
            "l".repeat(300)
        );
        let err = serde_json::from_str::<CreateDeviceInput>(&json).unwrap_err();
        assert!(err.to_string().contains("label is too long"));
    }

    #[test]
    fn test_create_device_input_rejects_bad_uuid() {
        let json = r#"{"key":"not-a-uuid","algorithm":"ECC","label":"x"}"#;
        assert!(serde_json::from_str::<CreateDeviceInput>(json).is_err());
    }

    #[test]
    fn test_create_transaction_input_accepts_both_key_names() {
        let key = Uuid::new_v4();

        let by_key: CreateTransactionInput =
            serde_json::from_str(&format!(r#"{{"deviceKey":"{}","data":"hello"}}"#, key)).unwrap();
        let by_id: CreateTransactionInput =
            serde_json::from_str(&format!(r#"{{"deviceId":"{}","data":"hello"}}"#, key)).unwrap();

        assert_eq!(by_key, by_id);
        assert_eq!(by_key.data.as_str(), "hello");
    }

    #[test]
    fn test_create_transaction_input_rejects_short_data() {
        let json = format!(r#"{{"deviceKey":"{}","data":"x"}}"#, Uuid::new_v4());
        let err = serde_json::from_str::<CreateTransactionInput>(&json).unwrap_err();
        assert!(err.to_string().contains("data must be between"));
    }

    proptest! {
        #[test]
        fn label_accepts_exactly_up_to_limit(s in "\\PC{0,300}") {
            let length = s.chars().count();
            prop_assert_eq!(Label::new(s).is_ok(), length <= MAX_LABEL_CHARS);
        }

        #[test]
        fn data_accepts_exactly_within_bounds(s in "\\PC{0,1100}") {
            let length = s.chars().count();
            prop_assert_eq!(
                TransactionData::new(s).is_ok(),
                (MIN_DATA_CHARS..=MAX_DATA_CHARS).contains(&length)
            );
        }
    }
}
