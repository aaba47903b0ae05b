use soroban_sdk::contracterror;

/// Errors returned by ledger operations
///
/// Every error is raised before the failing operation writes anything, so a
/// rejected call leaves balances, allowances and supply untouched.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Amount is negative
    InvalidAmount = 1,
    /// Sender (or owner, for transfer_from) holds less than the amount
    InsufficientBalance = 2,
    /// Spender was approved for less than the amount
    InsufficientAllowance = 3,
    /// Destination cannot hold tokens
    InvalidRecipient = 4,
    /// Checked arithmetic left the i128 range
    Overflow = 5,
}

/// Result type for ledger operations
pub type TokenResult<T> = Result<T, TokenError>;
