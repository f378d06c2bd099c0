// Tier 2: credential verifier required (identity-scoped and write paths)
pub mod addresses;
pub mod orders;
pub mod payments;
pub mod reviews;
pub mod whoami;
