// ============================================================================
// LEDGER INVARIANT SPECIFICATIONS
// ============================================================================
//
// These specifications call the actual contract entry points and verify the
// resulting state changes.
//
// KEY INVARIANTS:
// 1. Conservation - transfers neither create nor destroy tokens
// 2. Rejection - a failed transfer leaves balances unchanged
// 3. Allowance accounting - transfer_from consumes exactly the moved amount
// 4. Approve semantics - approve overwrites
// 5. Isolation - a transfer never touches a third holder
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::certora_specs::model::{self, AllowanceSnapshot, LedgerSnapshot};

#[cfg(feature = "certora")]
use crate::PawnShop;

/// RULE: A successful transfer conserves the pair sum and the supply
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_conserves_supply(
    env: Env,
    owner: Address,
    initial_supply: i128,
    to: Address,
    amount: i128,
) {
    cvlr_assume!(initial_supply >= 0);
    cvlr_assume!(amount >= 0 && amount <= initial_supply);
    cvlr_assume!(owner != to);

    PawnShop::__constructor(env.clone(), owner.clone(), initial_supply);
    model::set_initial_supply(initial_supply);

    let before = LedgerSnapshot::capture(&env, &owner, &to);
    let result = PawnShop::transfer(env.clone(), owner.clone(), to.clone(), amount);
    cvlr_assume!(result.is_ok());
    let after = LedgerSnapshot::capture(&env, &owner, &to);

    cvlr_assert!(after.supply == model::get_initial_supply());
    cvlr_assert!(after.supply == before.supply);
    cvlr_assert!(after.from_balance + after.to_balance == before.from_balance + before.to_balance);
    cvlr_assert!(after.from_balance == before.from_balance - amount);
}

/// RULE: Transferring more than the balance fails and changes nothing
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_insufficient_balance_reverts(
    env: Env,
    owner: Address,
    initial_supply: i128,
    to: Address,
    amount: i128,
) {
    cvlr_assume!(initial_supply >= 0);
    cvlr_assume!(amount > initial_supply);
    cvlr_assume!(owner != to);

    PawnShop::__constructor(env.clone(), owner.clone(), initial_supply);

    let before = LedgerSnapshot::capture(&env, &owner, &to);
    let result = PawnShop::transfer(env.clone(), owner.clone(), to.clone(), amount);
    let after = LedgerSnapshot::capture(&env, &owner, &to);

    cvlr_assert!(result == Err(crate::TokenError::InsufficientBalance));
    cvlr_assert!(after.from_balance == before.from_balance);
    cvlr_assert!(after.to_balance == before.to_balance);
}

/// RULE: transfer_from decrements the allowance by exactly the amount moved
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_from_spends_allowance(
    env: Env,
    owner: Address,
    spender: Address,
    to: Address,
    initial_supply: i128,
    approved: i128,
    amount: i128,
) {
    cvlr_assume!(initial_supply >= 0 && approved >= 0);
    cvlr_assume!(amount >= 0 && amount <= approved && amount <= initial_supply);
    cvlr_assume!(owner != to);

    PawnShop::__constructor(env.clone(), owner.clone(), initial_supply);
    let approved_ok = PawnShop::approve(env.clone(), owner.clone(), spender.clone(), approved);
    cvlr_assume!(approved_ok.is_ok());

    let before = AllowanceSnapshot::capture(&env, &owner, &spender);
    let result = PawnShop::transfer_from(
        env.clone(),
        spender.clone(),
        owner.clone(),
        to.clone(),
        amount,
    );
    cvlr_assume!(result.is_ok());
    let after = AllowanceSnapshot::capture(&env, &owner, &spender);

    cvlr_assert!(before.amount - after.amount == amount);
}

/// RULE: approve sets the allowance to the given value regardless of history
#[cfg(feature = "certora")]
#[rule]
pub fn approve_overwrites_allowance(
    env: Env,
    owner: Address,
    spender: Address,
    initial_supply: i128,
    first: i128,
    second: i128,
) {
    cvlr_assume!(initial_supply >= 0 && first >= 0 && second >= 0);

    PawnShop::__constructor(env.clone(), owner.clone(), initial_supply);

    let _ = PawnShop::approve(env.clone(), owner.clone(), spender.clone(), first);
    let result = PawnShop::approve(env.clone(), owner.clone(), spender.clone(), second);
    cvlr_assume!(result.is_ok());

    cvlr_assert!(PawnShop::allowance(env.clone(), owner, spender) == second);
}

/// RULE: A transfer never changes the balance of a third holder
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_isolates_bystander(
    env: Env,
    owner: Address,
    to: Address,
    bystander: Address,
    initial_supply: i128,
    amount: i128,
) {
    model::init();
    cvlr_assume!(initial_supply >= 0);
    cvlr_assume!(bystander != owner && bystander != to);

    PawnShop::__constructor(env.clone(), owner.clone(), initial_supply);

    let bystander_before = PawnShop::balance_of(env.clone(), bystander.clone());
    cvlr_assume!(bystander_before == model::skolem_bystander_balance());
    let _ = PawnShop::transfer(env.clone(), owner, to, amount);
    let bystander_after = PawnShop::balance_of(env.clone(), bystander);

    cvlr_assert!(bystander_after == model::skolem_bystander_balance());
}

/// SANITY: A transfer can succeed at all
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_sanity(env: Env, owner: Address, to: Address, initial_supply: i128, amount: i128) {
    cvlr_assume!(initial_supply >= 0);
    PawnShop::__constructor(env.clone(), owner.clone(), initial_supply);
    let result = PawnShop::transfer(env.clone(), owner, to, amount);
    cvlr_satisfy!(result.is_ok());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
