#![no_std]

mod allowance;
mod error;
mod metadata;

pub use allowance::*;
pub use error::*;
pub use metadata::*;

/// Token name reported by `name()`
pub const TOKEN_NAME: &str = "PawnShop";

/// Token ticker reported by `symbol()`
pub const TOKEN_SYMBOL: &str = "PWN";

/// Number of decimal places in the display representation
/// 18 matches the ERC20 convention the ledger mirrors
pub const TOKEN_DECIMALS: u32 = 18;

/// Smallest amount accepted by any ledger operation
pub const MIN_AMOUNT: i128 = 0;

/// Returns true if `amount` can be used as a token amount
pub fn is_valid_amount(amount: i128) -> bool {
    amount >= MIN_AMOUNT
}
