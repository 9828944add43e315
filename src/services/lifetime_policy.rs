// src/services/lifetime_policy.rs
//
// Lifetime Policy
//
// Turns caller-supplied duration names and amounts (often straight from a
// config field or API payload) into a validated TokenLifetime.
//
// RULES:
// - Absent name or amount falls back to the configured default
// - A present but unknown name is a validation error, never a silent default
// - Amounts are bounded by max_amount
// - PERPETUAL can be disabled per policy

use serde::{Deserialize, Serialize};

use crate::domain::token_duration::{TokenDurationType, TokenLifetime};
use crate::domain::DomainError;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimePolicyConfig {
    pub default_type: TokenDurationType,
    pub default_amount: u32,
    pub max_amount: u32,
    pub allow_perpetual: bool,
}

impl Default for LifetimePolicyConfig {
    fn default() -> Self {
        Self {
            default_type: TokenDurationType::Day,
            default_amount: 1,
            max_amount: 365,
            allow_perpetual: true,
        }
    }
}

impl LifetimePolicyConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub struct LifetimePolicy {
    config: LifetimePolicyConfig,
}

impl LifetimePolicy {
    /// Build a policy, rejecting configs whose own default would not resolve
    pub fn new(config: LifetimePolicyConfig) -> AppResult<Self> {
        let policy = Self { config };
        policy.resolve(None, None)?;
        Ok(policy)
    }

    pub fn config(&self) -> &LifetimePolicyConfig {
        &self.config
    }

    /// Resolve a requested lifetime against this policy
    pub fn resolve(&self, name: Option<&str>, amount: Option<u32>) -> AppResult<TokenLifetime> {
        let duration_type = match name {
            None => self.config.default_type,
            Some(name) => TokenDurationType::from_string(name).ok_or_else(|| {
                log::warn!("rejected unknown token duration type {:?}", name);
                AppError::Validation(format!(
                    "Unknown token duration type {:?}, expected one of {}",
                    name,
                    TokenDurationType::all_names().join(", ")
                ))
            })?,
        };

        if duration_type.is_perpetual() {
            if !self.config.allow_perpetual {
                log::warn!("rejected PERPETUAL lifetime: disabled by policy");
                return Err(AppError::Validation(
                    "PERPETUAL token lifetimes are not allowed".to_string(),
                ));
            }
            log::debug!("resolved lifetime PERPETUAL");
            return Ok(TokenLifetime::perpetual());
        }

        let amount = amount.unwrap_or(self.config.default_amount);
        if amount > self.config.max_amount {
            log::warn!(
                "rejected lifetime {} {}: exceeds max {}",
                amount,
                duration_type,
                self.config.max_amount
            );
            return Err(DomainError::InvariantViolation(format!(
                "Amount {} exceeds maximum {}",
                amount, self.config.max_amount
            ))
            .into());
        }

        let lifetime = TokenLifetime::new(duration_type, amount)?;
        log::debug!("resolved lifetime {}", lifetime);
        Ok(lifetime)
    }
}
