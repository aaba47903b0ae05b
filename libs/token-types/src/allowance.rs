use soroban_sdk::{contracttype, Address};

/// Allowance key: `spender` may move up to the stored amount out of `owner`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}

impl AllowanceKey {
    pub fn new(owner: Address, spender: Address) -> Self {
        Self { owner, spender }
    }
}
