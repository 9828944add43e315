use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::TokenDurationType;
use super::invariants::validate_token_lifetime;
use crate::domain::{DomainError, DomainResult};

/// How long a token lives: a duration type and a count of its units.
/// PERPETUAL lifetimes always carry an amount of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTokenLifetime")]
pub struct TokenLifetime {
    pub duration_type: TokenDurationType,
    pub amount: u32,
}

/// Unvalidated wire shape; deserialization goes through `TokenLifetime::new`
#[derive(Deserialize)]
struct RawTokenLifetime {
    duration_type: TokenDurationType,
    #[serde(default)]
    amount: u32,
}

impl TryFrom<RawTokenLifetime> for TokenLifetime {
    type Error = DomainError;

    fn try_from(raw: RawTokenLifetime) -> Result<Self, Self::Error> {
        Self::new(raw.duration_type, raw.amount)
    }
}

impl TokenLifetime {
    /// Create a validated lifetime
    pub fn new(duration_type: TokenDurationType, amount: u32) -> DomainResult<Self> {
        let lifetime = if duration_type.is_perpetual() {
            Self::perpetual()
        } else {
            Self {
                duration_type,
                amount,
            }
        };
        validate_token_lifetime(&lifetime)?;
        Ok(lifetime)
    }

    pub fn perpetual() -> Self {
        Self {
            duration_type: TokenDurationType::Perpetual,
            amount: 0,
        }
    }

    pub fn is_perpetual(&self) -> bool {
        self.duration_type.is_perpetual()
    }

    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.duration_type.expires_at(issued_at, self.amount)
    }

    /// A token is expired once `now` reaches its expiry instant.
    /// Perpetual tokens never expire.
    pub fn is_expired(&self, issued_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.expires_at(issued_at) {
            Some(expiry) => now >= expiry,
            None => false,
        }
    }
}

impl std::fmt::Display for TokenLifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_perpetual() {
            write!(f, "{}", self.duration_type)
        } else {
            write!(f, "{} {}", self.amount, self.duration_type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_valid_lifetime() {
        let lifetime = TokenLifetime::new(TokenDurationType::Week, 2).unwrap();
        assert_eq!(lifetime.duration_type, TokenDurationType::Week);
        assert_eq!(lifetime.amount, 2);
        assert_eq!(lifetime.to_string(), "2 WEEK");
    }

    #[test]
    fn test_zero_amount_fails() {
        assert!(TokenLifetime::new(TokenDurationType::Day, 0).is_err());
    }

    #[test]
    fn test_perpetual_normalises_amount() {
        let lifetime = TokenLifetime::new(TokenDurationType::Perpetual, 9).unwrap();
        assert_eq!(lifetime, TokenLifetime::perpetual());
        assert_eq!(lifetime.amount, 0);
        assert_eq!(lifetime.to_string(), "PERPETUAL");
    }

    #[test]
    fn test_is_expired() {
        let issued = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let lifetime = TokenLifetime::new(TokenDurationType::Minute, 30).unwrap();

        let before = Utc.with_ymd_and_hms(2024, 3, 1, 12, 29, 59).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert!(!lifetime.is_expired(issued, before));
        assert!(lifetime.is_expired(issued, at));

        let far_future = Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap();
        assert!(!TokenLifetime::perpetual().is_expired(issued, far_future));
    }

    #[test]
    fn test_serde_shape() {
        let lifetime = TokenLifetime::new(TokenDurationType::Day, 7).unwrap();
        let value = serde_json::to_value(lifetime).unwrap();
        assert_eq!(value, serde_json::json!({ "duration_type": "DAY", "amount": 7 }));

        let parsed: TokenLifetime =
            serde_json::from_str(r#"{"duration_type":"YEAR","amount":1}"#).unwrap();
        assert_eq!(parsed.duration_type, TokenDurationType::Year);

        let perpetual: TokenLifetime =
            serde_json::from_str(r#"{"duration_type":"PERPETUAL"}"#).unwrap();
        assert_eq!(perpetual, TokenLifetime::perpetual());
    }

    #[test]
    fn test_deserialize_validates() {
        let result = serde_json::from_str::<TokenLifetime>(r#"{"duration_type":"DAY","amount":0}"#);
        assert!(result.is_err());
    }
}
