//! Card-level errors.

use crate::text::TextKey;
use ps_comfort::ComfortError;
use ps_core::PsError;
use thiserror::Error;

pub type CardResult<T> = Result<T, CardError>;

#[derive(Error, Debug)]
pub enum CardError {
    /// The configuration lists no measurement points. Fatal at construction.
    #[error("no points or entities configured")]
    NoPointsConfigured,

    /// Every configured point lacked a usable reading.
    #[error("no valid entity found among {configured} configured points")]
    NoValidEntity { configured: usize },

    #[error("invalid configuration: {what}")]
    InvalidConfig { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CardError {
    /// User-facing message key for the conditions the card reports itself.
    pub fn text_key(&self) -> Option<TextKey> {
        match self {
            CardError::NoPointsConfigured => Some(TextKey::NoPointsConfigured),
            CardError::NoValidEntity { .. } => Some(TextKey::NoValidEntity),
            _ => None,
        }
    }
}

impl From<ComfortError> for CardError {
    fn from(e: ComfortError) -> Self {
        CardError::InvalidConfig {
            what: e.to_string(),
        }
    }
}

impl From<PsError> for CardError {
    fn from(e: PsError) -> Self {
        CardError::InvalidConfig {
            what: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comfort_errors_become_invalid_config() {
        let err: CardError = ComfortError::NonFinite { what: "tempMin" }.into();
        assert!(matches!(err, CardError::InvalidConfig { .. }));
    }

    #[test]
    fn card_conditions_have_message_keys() {
        assert_eq!(
            CardError::NoPointsConfigured.text_key(),
            Some(TextKey::NoPointsConfigured)
        );
        assert_eq!(
            CardError::NoValidEntity { configured: 2 }.text_key(),
            Some(TextKey::NoValidEntity)
        );
        let invalid = CardError::InvalidConfig { what: "x".into() };
        assert_eq!(invalid.text_key(), None);
    }

    #[test]
    fn no_valid_entity_reports_count() {
        let err = CardError::NoValidEntity { configured: 3 };
        assert_eq!(
            err.to_string(),
            "no valid entity found among 3 configured points"
        );
    }
}
