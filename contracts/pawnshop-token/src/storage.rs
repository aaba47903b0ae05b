use soroban_sdk::{contracttype, Address, Env};
use token_types::{AllowanceKey, TokenMetadata};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Constraints for ledger operations:
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - Supply, owner and metadata live in Instance storage (read on most calls)
// - Each balance (~16 bytes) is stored as a separate Persistent entry
// - Each allowance (~16 bytes) is stored as a separate Persistent entry
// - Zeroed balances and allowances are removed to save storage
//
// Operation footprint:
// - transfer touches 2 balance entries
// - transfer_from touches 2 balance entries + 1 allowance entry
// ============================================================================

/// Storage keys for the ledger contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token metadata (Instance storage)
    Metadata,
    /// Account credited with the initial supply (Instance storage)
    Owner,
    /// Total supply (Instance storage)
    TotalSupply,
    /// Balance: holder -> i128 (Persistent storage)
    Balance(Address),
    /// Allowance: (owner, spender) -> i128 (Persistent storage)
    Allowance(AllowanceKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Metadata ===

pub fn get_metadata(env: &Env) -> TokenMetadata {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .unwrap_or_else(|| TokenMetadata::pawnshop(env))
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
    extend_instance_ttl(env);
}

// === Owner ===

pub fn get_owner(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("Ledger not constructed")
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

// === Supply ===

pub fn get_total_supply(env: &Env) -> i128 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    extend_instance_ttl(env);
}

// === Balance ===

pub fn get_balance(env: &Env, holder: &Address) -> i128 {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, holder: &Address, balance: i128) {
    let key = DataKey::Balance(holder.clone());
    if balance == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

// === Allowance ===

pub fn get_allowance(env: &Env, key: &AllowanceKey) -> i128 {
    let data_key = DataKey::Allowance(key.clone());
    env.storage().persistent().get(&data_key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, key: &AllowanceKey, amount: i128) {
    let data_key = DataKey::Allowance(key.clone());
    if amount == 0 {
        // Remove empty allowance
        env.storage().persistent().remove(&data_key);
    } else {
        env.storage().persistent().set(&data_key, &amount);
        extend_persistent_ttl(env, &data_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PawnShop;
    use soroban_sdk::testutils::Address as _;

    fn register_ledger(env: &Env) -> (Address, Address) {
        let owner = Address::generate(env);
        let contract_id = env.register(PawnShop, (&owner, 1000_i128));
        (contract_id, owner)
    }

    #[test]
    fn test_balance_defaults_to_zero() {
        let env = Env::default();
        let (contract_id, _) = register_ledger(&env);
        let holder = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(get_balance(&env, &holder), 0);
        });
    }

    #[test]
    fn test_zero_balance_removes_entry() {
        let env = Env::default();
        let (contract_id, _) = register_ledger(&env);
        let holder = Address::generate(&env);

        let key = DataKey::Balance(holder.clone());

        env.as_contract(&contract_id, || {
            set_balance(&env, &holder, 250);
            assert!(env.storage().persistent().has(&key));
            assert_eq!(get_balance(&env, &holder), 250);

            set_balance(&env, &holder, 0);
            assert!(!env.storage().persistent().has(&key));
            assert_eq!(get_balance(&env, &holder), 0);
        });
    }

    #[test]
    fn test_allowance_roundtrip_and_removal() {
        let env = Env::default();
        let (contract_id, _) = register_ledger(&env);
        let key = AllowanceKey::new(Address::generate(&env), Address::generate(&env));

        env.as_contract(&contract_id, || {
            assert_eq!(get_allowance(&env, &key), 0);
            set_allowance(&env, &key, 75);
            assert_eq!(get_allowance(&env, &key), 75);
            set_allowance(&env, &key, 0);
            assert_eq!(get_allowance(&env, &key), 0);
        });
    }

    #[test]
    fn test_constructed_supply_owner_and_metadata() {
        let env = Env::default();
        let (contract_id, owner) = register_ledger(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(get_total_supply(&env), 1000);
            assert_eq!(get_owner(&env), owner);
            assert_eq!(get_balance(&env, &owner), 1000);
            assert_eq!(get_metadata(&env), TokenMetadata::pawnshop(&env));
        });
    }
}
