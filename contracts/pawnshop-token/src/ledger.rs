use crate::events;
use crate::invariants;
use crate::storage::{
    get_allowance, get_balance, get_total_supply, set_allowance, set_balance,
    set_metadata, set_owner, set_total_supply,
};
use soroban_sdk::{log, Address, Env};
use token_math::{compute_transfer, spend_allowance, validate_amount, TransferOutcome};
use token_types::{AllowanceKey, TokenError, TokenMetadata, TokenResult};

/// Construct the ledger: the whole supply is credited to `owner`
pub fn construct(env: &Env, owner: &Address, initial_supply: i128) -> TokenResult<()> {
    let initial_supply = validate_amount(initial_supply)?;

    set_metadata(env, &TokenMetadata::pawnshop(env));
    set_owner(env, owner);
    set_total_supply(env, initial_supply);
    set_balance(env, owner, initial_supply);

    debug_assert!(invariants::balances_match_supply(
        get_balance(env, owner),
        get_total_supply(env)
    ));

    log!(env, "ledger constructed", owner.clone(), initial_supply);
    events::initialized(env, owner, initial_supply);
    Ok(())
}

/// Move `amount` from `from` to `to`
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> TokenResult<()> {
    let amount = validate_amount(amount)?;
    validate_recipient(env, to)?;

    let outcome = plan_transfer(env, from, to, amount)?;
    apply_transfer(env, from, to, &outcome);

    events::transfer(env, from, to, amount);
    Ok(())
}

/// Set the allowance of `spender` over `owner`'s balance, overwriting any prior value
pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> TokenResult<()> {
    let amount = validate_amount(amount)?;

    let key = AllowanceKey::new(owner.clone(), spender.clone());
    set_allowance(env, &key, amount);

    debug_assert!(invariants::approve_overwrites(get_allowance(env, &key), amount));

    events::approve(env, owner, spender, amount);
    Ok(())
}

/// Move `amount` from `owner` to `to` on behalf of `spender`, consuming allowance
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    owner: &Address,
    to: &Address,
    amount: i128,
) -> TokenResult<()> {
    let amount = validate_amount(amount)?;
    validate_recipient(env, to)?;

    // All checks run before the first write
    let key = AllowanceKey::new(owner.clone(), spender.clone());
    let allowance_before = get_allowance(env, &key);
    let allowance_after = spend_allowance(allowance_before, amount)?;
    let outcome = plan_transfer(env, owner, to, amount)?;

    debug_assert!(invariants::allowance_spent_exact(
        allowance_before,
        allowance_after,
        amount
    ));
    debug_assert!(invariants::allowance_non_negative(allowance_after));

    set_allowance(env, &key, allowance_after);
    apply_transfer(env, owner, to, &outcome);

    events::transfer(env, owner, to, amount);
    Ok(())
}

/// Raise the allowance of `spender` by `added`
pub fn increase_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    added: i128,
) -> TokenResult<i128> {
    let key = AllowanceKey::new(owner.clone(), spender.clone());
    let allowance = token_math::increase_allowance(get_allowance(env, &key), added)?;

    set_allowance(env, &key, allowance);
    events::approve(env, owner, spender, allowance);
    Ok(allowance)
}

/// Lower the allowance of `spender` by `subtracted`
pub fn decrease_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    subtracted: i128,
) -> TokenResult<i128> {
    let key = AllowanceKey::new(owner.clone(), spender.clone());
    let allowance = token_math::decrease_allowance(get_allowance(env, &key), subtracted)?;

    set_allowance(env, &key, allowance);
    events::approve(env, owner, spender, allowance);
    Ok(allowance)
}

/// Soroban addresses are never null; the only holder that can never move
/// tokens again is the ledger contract itself.
fn validate_recipient(env: &Env, to: &Address) -> TokenResult<()> {
    if *to == env.current_contract_address() {
        return Err(TokenError::InvalidRecipient);
    }
    Ok(())
}

/// Compute both new balances without writing anything
fn plan_transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> TokenResult<TransferOutcome> {
    let is_self_transfer = from == to;
    let from_before = get_balance(env, from);
    let to_before = if is_self_transfer {
        from_before
    } else {
        get_balance(env, to)
    };

    let outcome = compute_transfer(from_before, to_before, amount, is_self_transfer)?;

    debug_assert!(invariants::transfer_conserves(
        from_before,
        to_before,
        outcome.from_balance,
        outcome.to_balance,
        is_self_transfer
    ));
    debug_assert!(invariants::balance_non_negative(outcome.from_balance));
    debug_assert!(
        is_self_transfer || invariants::transfer_debits_exact(from_before, outcome.from_balance, amount)
    );

    Ok(outcome)
}

fn apply_transfer(env: &Env, from: &Address, to: &Address, outcome: &TransferOutcome) {
    if from == to {
        return;
    }
    let supply_before = get_total_supply(env);

    set_balance(env, from, outcome.from_balance);
    set_balance(env, to, outcome.to_balance);

    debug_assert!(invariants::supply_unchanged(supply_before, get_total_supply(env)));
}
