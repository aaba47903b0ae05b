// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification specifications for the PawnShop token ledger.
//
// STRUCTURE:
//
// - model.rs        : Ghost state, Skolem variables, state snapshots
// - ledger_specs.rs : Transfer, approve and transfer_from verification
//
// PATTERNS USED:
//
// 1. Ghost state - Track the supply observed at construction
// 2. Skolem variables - Prove properties for an arbitrary third holder
// 3. State snapshots - Before/after comparisons
// 4. Sanity rules - Ensure rules aren't vacuously true
//
// USAGE:
// - Unit tests: cargo test -p pawnshop-token
// - Certora build: cargo build --features certora -p pawnshop-token
// - Verification: certoraSorobanProver pawnshop_token.conf
//
// ============================================================================

// Ghost state and model initialization
#[cfg(feature = "certora")]
pub mod model;

// Spec modules
pub mod ledger_specs;
