// ============================================================================
// GHOST STATE AND MODEL INITIALIZATION
// ============================================================================

use soroban_sdk::{Address, Env};

use crate::PawnShop;

/// Ghost copy of the supply fixed at construction
static mut GHOST_INITIAL_SUPPLY: i128 = 0;

/// Skolem variable for a holder that is neither side of a transfer
static mut SKOLEM_BYSTANDER_BALANCE: i128 = 0;

// ============================================================================
// GHOST STATE ACCESSORS
// ============================================================================

pub fn get_initial_supply() -> i128 {
    unsafe { GHOST_INITIAL_SUPPLY }
}

pub fn set_initial_supply(supply: i128) {
    unsafe { GHOST_INITIAL_SUPPLY = supply }
}

pub fn skolem_bystander_balance() -> i128 {
    unsafe { SKOLEM_BYSTANDER_BALANCE }
}

// ============================================================================
// MODEL INITIALIZATION
// ============================================================================

/// Initialize ghost state with nondeterministic values
pub fn init() {
    use cvlr::nondet::nondet;

    unsafe {
        GHOST_INITIAL_SUPPLY = nondet();
        SKOLEM_BYSTANDER_BALANCE = nondet();
    }
}

// ============================================================================
// STATE SNAPSHOT HELPERS
// ============================================================================

/// Captures the balances of a transfer's two sides and the supply
#[derive(Clone)]
pub struct LedgerSnapshot {
    pub supply: i128,
    pub from_balance: i128,
    pub to_balance: i128,
}

impl LedgerSnapshot {
    pub fn capture(env: &Env, from: &Address, to: &Address) -> Self {
        Self {
            supply: PawnShop::total_supply(env.clone()),
            from_balance: PawnShop::balance_of(env.clone(), from.clone()),
            to_balance: PawnShop::balance_of(env.clone(), to.clone()),
        }
    }
}

/// Captures an allowance for before/after comparisons
#[derive(Clone)]
pub struct AllowanceSnapshot {
    pub amount: i128,
}

impl AllowanceSnapshot {
    pub fn capture(env: &Env, owner: &Address, spender: &Address) -> Self {
        Self {
            amount: PawnShop::allowance(env.clone(), owner.clone(), spender.clone()),
        }
    }
}
