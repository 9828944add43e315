use super::lifetime::TokenLifetime;
use crate::domain::{DomainError, DomainResult};

/// Validates all TokenLifetime invariants
pub fn validate_token_lifetime(lifetime: &TokenLifetime) -> DomainResult<()> {
    validate_amount(lifetime)?;
    Ok(())
}

/// Amount invariants:
/// 1. Finite lifetimes cover at least one unit
/// 2. Perpetual lifetimes carry no amount
fn validate_amount(lifetime: &TokenLifetime) -> DomainResult<()> {
    if lifetime.is_perpetual() {
        if lifetime.amount != 0 {
            return Err(DomainError::InvariantViolation(format!(
                "PERPETUAL lifetime must have amount 0, got {}",
                lifetime.amount
            )));
        }
    } else if lifetime.amount == 0 {
        return Err(DomainError::InvariantViolation(format!(
            "{} lifetime must cover at least one unit",
            lifetime.duration_type
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token_duration::TokenDurationType;

    #[test]
    fn test_valid_lifetimes() {
        for duration_type in TokenDurationType::ALL {
            let amount = if duration_type.is_perpetual() { 0 } else { 1 };
            let lifetime = TokenLifetime {
                duration_type,
                amount,
            };
            assert!(validate_token_lifetime(&lifetime).is_ok());
        }
    }

    #[test]
    fn test_zero_amount_rejected() {
        let lifetime = TokenLifetime {
            duration_type: TokenDurationType::Month,
            amount: 0,
        };
        let err = validate_token_lifetime(&lifetime).unwrap_err();
        assert!(err.to_string().contains("MONTH"));
    }

    #[test]
    fn test_perpetual_with_amount_rejected() {
        let lifetime = TokenLifetime {
            duration_type: TokenDurationType::Perpetual,
            amount: 3,
        };
        assert!(matches!(
            validate_token_lifetime(&lifetime),
            Err(DomainError::InvariantViolation(_))
        ));
    }
}
