use token_types::{is_valid_amount, TokenError, TokenResult};

/// Reject negative amounts
pub fn validate_amount(amount: i128) -> TokenResult<i128> {
    if !is_valid_amount(amount) {
        return Err(TokenError::InvalidAmount);
    }
    Ok(amount)
}

/// Remove `amount` from `balance`
pub fn debit(balance: i128, amount: i128) -> TokenResult<i128> {
    let amount = validate_amount(amount)?;
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    balance.checked_sub(amount).ok_or(TokenError::Overflow)
}

/// Add `amount` to `balance`
pub fn credit(balance: i128, amount: i128) -> TokenResult<i128> {
    let amount = validate_amount(amount)?;
    balance.checked_add(amount).ok_or(TokenError::Overflow)
}

/// New balances of both sides of a transfer, computed before anything is written
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransferOutcome {
    pub from_balance: i128,
    pub to_balance: i128,
}

/// Compute a balance movement of `amount` from one holder to another.
///
/// When `is_self_transfer` is set both balances refer to the same entry: the
/// sufficiency check still applies but the resulting balance is unchanged.
pub fn compute_transfer(
    from_balance: i128,
    to_balance: i128,
    amount: i128,
    is_self_transfer: bool,
) -> TokenResult<TransferOutcome> {
    let from_after = debit(from_balance, amount)?;

    if is_self_transfer {
        return Ok(TransferOutcome {
            from_balance,
            to_balance: from_balance,
        });
    }

    let to_after = credit(to_balance, amount)?;
    Ok(TransferOutcome {
        from_balance: from_after,
        to_balance: to_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(0), Ok(0));
        assert_eq!(validate_amount(1000), Ok(1000));
        assert_eq!(validate_amount(-1), Err(TokenError::InvalidAmount));
    }

    #[test]
    fn test_debit() {
        assert_eq!(debit(1000, 300), Ok(700));
        assert_eq!(debit(1000, 1000), Ok(0));
        assert_eq!(debit(1000, 0), Ok(1000));
        assert_eq!(debit(1000, 1001), Err(TokenError::InsufficientBalance));
        assert_eq!(debit(0, 1), Err(TokenError::InsufficientBalance));
        assert_eq!(debit(1000, -5), Err(TokenError::InvalidAmount));
    }

    #[test]
    fn test_credit() {
        assert_eq!(credit(0, 300), Ok(300));
        assert_eq!(credit(700, 300), Ok(1000));
        assert_eq!(credit(i128::MAX, 1), Err(TokenError::Overflow));
        assert_eq!(credit(0, -1), Err(TokenError::InvalidAmount));
    }

    #[test]
    fn test_compute_transfer_conserves_sum() {
        let outcome = compute_transfer(1000, 50, 400, false).unwrap();
        assert_eq!(outcome.from_balance, 600);
        assert_eq!(outcome.to_balance, 450);
        assert_eq!(outcome.from_balance + outcome.to_balance, 1050);
    }

    #[test]
    fn test_compute_transfer_insufficient() {
        assert_eq!(
            compute_transfer(100, 0, 101, false),
            Err(TokenError::InsufficientBalance)
        );
    }

    #[test]
    fn test_compute_self_transfer_is_noop() {
        let outcome = compute_transfer(1000, 1000, 400, true).unwrap();
        assert_eq!(outcome.from_balance, 1000);
        assert_eq!(outcome.to_balance, 1000);
    }

    #[test]
    fn test_compute_self_transfer_still_checks_balance() {
        assert_eq!(
            compute_transfer(10, 10, 11, true),
            Err(TokenError::InsufficientBalance)
        );
    }

    #[test]
    fn test_compute_transfer_zero_amount() {
        let outcome = compute_transfer(0, 0, 0, false).unwrap();
        assert_eq!(outcome, TransferOutcome { from_balance: 0, to_balance: 0 });
    }
}
