// Tier 1: no authentication required (catalog browsing, country lookup)
pub mod categories;
pub mod country;
pub mod owners;
pub mod products;
