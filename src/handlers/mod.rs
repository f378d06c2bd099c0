// Two security tiers, mirroring the route table:
// public (no auth) and protected (credential verifier on every route)
pub mod protected;
pub mod public;
