// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates expressing the accounting properties of the ledger. The ledger
// asserts them in debug builds after computing each state change, and the
// Certora rules in `certora_specs` check the same properties symbolically.
//
// INVARIANT CATEGORIES:
//
// 1. SUPPLY INVARIANTS
//    - Supply never changes after construction
//    - Sum of balances equals supply
//
// 2. BALANCE INVARIANTS
//    - Balances are never negative
//    - A transfer moves exactly `amount` between two holders
//
// 3. ALLOWANCE INVARIANTS
//    - Allowances are never negative
//    - transfer_from consumes exactly `amount` of the allowance
//    - approve overwrites, it does not accumulate
//
// ============================================================================

// ============================================================================
// SUPPLY INVARIANTS
// ============================================================================

/// Invariant: supply is constant
///
/// Property:
///   supply_after == supply_before
pub fn supply_unchanged(supply_before: i128, supply_after: i128) -> bool {
    supply_before == supply_after
}

/// Invariant: balances account for the whole supply
///
/// Property:
///   sum(balances) == total_supply
///
/// Note: This is a global property over all holders. Callers pass the sum
/// of every balance they know of.
pub fn balances_match_supply(sum_of_balances: i128, total_supply: i128) -> bool {
    sum_of_balances == total_supply
}

// ============================================================================
// BALANCE INVARIANTS
// ============================================================================

/// Invariant: balance is non-negative
///
/// Property:
///   balance >= 0
pub fn balance_non_negative(balance: i128) -> bool {
    balance >= 0
}

/// Invariant: a transfer neither creates nor destroys tokens
///
/// Property:
///   from_after + to_after == from_before + to_before   (distinct holders)
///   from_after == from_before                          (self-transfer)
pub fn transfer_conserves(
    from_before: i128,
    to_before: i128,
    from_after: i128,
    to_after: i128,
    is_self_transfer: bool,
) -> bool {
    if is_self_transfer {
        return from_after == from_before && to_after == from_before;
    }
    match (
        from_before.checked_add(to_before),
        from_after.checked_add(to_after),
    ) {
        (Some(before), Some(after)) => before == after,
        _ => false,
    }
}

/// Invariant: the sender lost exactly `amount`
///
/// Property:
///   from_before - from_after == amount   (distinct holders)
pub fn transfer_debits_exact(from_before: i128, from_after: i128, amount: i128) -> bool {
    from_before.checked_sub(from_after) == Some(amount)
}

// ============================================================================
// ALLOWANCE INVARIANTS
// ============================================================================

/// Invariant: allowance is non-negative
///
/// Property:
///   allowance >= 0
pub fn allowance_non_negative(allowance: i128) -> bool {
    allowance >= 0
}

/// Invariant: transfer_from consumes exactly the moved amount
///
/// Property:
///   allowance_before - allowance_after == amount
pub fn allowance_spent_exact(allowance_before: i128, allowance_after: i128, amount: i128) -> bool {
    allowance_before.checked_sub(allowance_after) == Some(amount)
}

/// Invariant: approve sets the allowance to the requested amount
///
/// Property:
///   allowance_after == approved_amount
pub fn approve_overwrites(allowance_after: i128, approved_amount: i128) -> bool {
    allowance_after == approved_amount
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supply_unchanged() {
        assert!(supply_unchanged(1000, 1000));
        assert!(!supply_unchanged(1000, 999));
    }

    #[test]
    fn test_balances_match_supply() {
        assert!(balances_match_supply(1000, 1000));
        assert!(!balances_match_supply(1001, 1000));
    }

    #[test]
    fn test_balance_non_negative() {
        assert!(balance_non_negative(0));
        assert!(balance_non_negative(1));
        assert!(!balance_non_negative(-1));
    }

    #[test]
    fn test_transfer_conserves_distinct() {
        assert!(transfer_conserves(1000, 0, 600, 400, false));
        assert!(!transfer_conserves(1000, 0, 600, 401, false)); // Created a token
        assert!(!transfer_conserves(1000, 0, 600, 399, false)); // Destroyed a token
    }

    #[test]
    fn test_transfer_conserves_self() {
        assert!(transfer_conserves(500, 500, 500, 500, true));
        assert!(!transfer_conserves(500, 500, 400, 500, true));
    }

    #[test]
    fn test_transfer_conserves_overflow_is_violation() {
        assert!(!transfer_conserves(i128::MAX, 1, i128::MAX, 1, false));
    }

    #[test]
    fn test_transfer_debits_exact() {
        assert!(transfer_debits_exact(1000, 700, 300));
        assert!(!transfer_debits_exact(1000, 701, 300));
    }

    #[test]
    fn test_allowance_invariants() {
        assert!(allowance_non_negative(0));
        assert!(!allowance_non_negative(-10));
        assert!(allowance_spent_exact(500, 200, 300));
        assert!(!allowance_spent_exact(500, 300, 300));
        assert!(approve_overwrites(42, 42));
        assert!(!approve_overwrites(84, 42)); // Accumulated instead of overwrote
    }
}
