#![no_std]

mod certora_specs;
mod events;
mod invariants;
mod ledger;
mod storage;


pub use token_types::{TokenError, TokenMetadata};

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};
use storage::{get_allowance, get_balance, get_metadata, get_owner, get_total_supply};
use token_types::AllowanceKey;

#[contract]
pub struct PawnShop;

#[contractimpl]
impl PawnShop {
    /// Construct the ledger at deploy time, crediting the full supply to `owner`
    ///
    /// Panics with `InvalidAmount` if `initial_supply` is negative, which
    /// aborts the deployment.
    pub fn __constructor(env: Env, owner: Address, initial_supply: i128) {
        if let Err(err) = ledger::construct(&env, &owner, initial_supply) {
            panic_with_error!(&env, err);
        }
    }

    /// Transfer `amount` from `from` to `to`
    ///
    /// # Errors
    /// * `InvalidAmount` - amount is negative
    /// * `InvalidRecipient` - `to` is this contract
    /// * `InsufficientBalance` - `from` holds less than `amount`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        ledger::transfer(&env, &from, &to, amount).inspect_err(|err| {
            log!(&env, "transfer rejected", from, *err as u32);
        })
    }

    /// Allow `spender` to move up to `amount` of `owner`'s balance
    ///
    /// Overwrites any previous allowance. The amount may exceed the current
    /// balance; it is only checked when spent.
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), TokenError> {
        owner.require_auth();
        ledger::approve(&env, &owner, &spender, amount).inspect_err(|err| {
            log!(&env, "approve rejected", owner, *err as u32);
        })
    }

    /// Transfer `amount` from `owner` to `to` using `spender`'s allowance
    ///
    /// # Errors
    /// * `InvalidAmount` - amount is negative
    /// * `InvalidRecipient` - `to` is this contract
    /// * `InsufficientAllowance` - allowance is below `amount`
    /// * `InsufficientBalance` - `owner` holds less than `amount`
    pub fn transfer_from(
        env: Env,
        spender: Address,
        owner: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        ledger::transfer_from(&env, &spender, &owner, &to, amount).inspect_err(|err| {
            log!(&env, "transfer_from rejected", spender, *err as u32);
        })
    }

    /// Raise `spender`'s allowance by `added`
    ///
    /// # Returns
    /// The new allowance
    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        added: i128,
    ) -> Result<i128, TokenError> {
        owner.require_auth();
        ledger::increase_allowance(&env, &owner, &spender, added).inspect_err(|err| {
            log!(&env, "increase_allowance rejected", owner, *err as u32);
        })
    }

    /// Lower `spender`'s allowance by `subtracted`
    ///
    /// # Returns
    /// The new allowance
    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        subtracted: i128,
    ) -> Result<i128, TokenError> {
        owner.require_auth();
        ledger::decrease_allowance(&env, &owner, &spender, subtracted).inspect_err(|err| {
            log!(&env, "decrease_allowance rejected", owner, *err as u32);
        })
    }

    // === View Functions ===

    /// Get total supply
    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    /// Get balance of `account` (zero if never seen)
    pub fn balance_of(env: Env, account: Address) -> i128 {
        get_balance(&env, &account)
    }

    /// Get remaining allowance of `spender` over `owner`
    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        get_allowance(&env, &AllowanceKey::new(owner, spender))
    }

    /// Get the account credited at construction
    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    /// Get token metadata
    pub fn metadata(env: Env) -> TokenMetadata {
        get_metadata(&env)
    }

    /// Get token name
    pub fn name(env: Env) -> String {
        get_metadata(&env).name
    }

    /// Get token symbol
    pub fn symbol(env: Env) -> String {
        get_metadata(&env).symbol
    }

    /// Get token decimals
    pub fn decimals(env: Env) -> u32 {
        get_metadata(&env).decimals
    }
}
