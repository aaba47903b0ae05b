use soroban_sdk::{contracttype, Env, String};

use crate::{TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};

/// Token metadata - immutable after construction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    /// Human readable name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Display decimals
    pub decimals: u32,
}

impl TokenMetadata {
    /// Metadata of the PawnShop token
    pub fn pawnshop(env: &Env) -> Self {
        Self {
            name: String::from_str(env, TOKEN_NAME),
            symbol: String::from_str(env, TOKEN_SYMBOL),
            decimals: TOKEN_DECIMALS,
        }
    }
}
