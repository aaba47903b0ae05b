use soroban_sdk::{contractevent, Address, Env};

// Events are published only after every storage write of the operation has
// been applied.

/// `("initialized", owner) -> initial_supply`
#[contractevent(topics = ["initialized"], data_format = "single-value")]
pub struct Initialized {
    #[topic]
    pub owner: Address,
    pub initial_supply: i128,
}

/// `("transfer", from, to) -> amount`
#[contractevent(topics = ["transfer"], data_format = "single-value")]
pub struct Transfer {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

/// `("approve", owner, spender) -> amount`
#[contractevent(topics = ["approve"], data_format = "single-value")]
pub struct Approve {
    #[topic]
    pub owner: Address,
    #[topic]
    pub spender: Address,
    pub amount: i128,
}

pub fn initialized(env: &Env, owner: &Address, initial_supply: i128) {
    Initialized {
        owner: owner.clone(),
        initial_supply,
    }
    .publish(env);
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    Transfer {
        from: from.clone(),
        to: to.clone(),
        amount,
    }
    .publish(env);
}

pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    Approve {
        owner: owner.clone(),
        spender: spender.clone(),
        amount,
    }
    .publish(env);
}
