use crate::balance_math::validate_amount;
use token_types::{TokenError, TokenResult};

/// Consume `amount` of an allowance
pub fn spend_allowance(allowance: i128, amount: i128) -> TokenResult<i128> {
    let amount = validate_amount(amount)?;
    if allowance < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    allowance.checked_sub(amount).ok_or(TokenError::Overflow)
}

/// Raise an allowance by `added`
pub fn increase_allowance(allowance: i128, added: i128) -> TokenResult<i128> {
    let added = validate_amount(added)?;
    allowance.checked_add(added).ok_or(TokenError::Overflow)
}

/// Lower an allowance by `subtracted`; going below zero is rejected, not clamped
pub fn decrease_allowance(allowance: i128, subtracted: i128) -> TokenResult<i128> {
    spend_allowance(allowance, subtracted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_allowance() {
        assert_eq!(spend_allowance(500, 200), Ok(300));
        assert_eq!(spend_allowance(500, 500), Ok(0));
        assert_eq!(spend_allowance(500, 501), Err(TokenError::InsufficientAllowance));
        assert_eq!(spend_allowance(0, 1), Err(TokenError::InsufficientAllowance));
        assert_eq!(spend_allowance(500, -1), Err(TokenError::InvalidAmount));
    }

    #[test]
    fn test_increase_allowance() {
        assert_eq!(increase_allowance(0, 100), Ok(100));
        assert_eq!(increase_allowance(100, 50), Ok(150));
        assert_eq!(increase_allowance(i128::MAX, 1), Err(TokenError::Overflow));
        assert_eq!(increase_allowance(100, -50), Err(TokenError::InvalidAmount));
    }

    #[test]
    fn test_decrease_allowance() {
        assert_eq!(decrease_allowance(100, 40), Ok(60));
        assert_eq!(decrease_allowance(100, 100), Ok(0));
        assert_eq!(decrease_allowance(100, 101), Err(TokenError::InsufficientAllowance));
    }
}
