pub mod slot;
pub mod store;
pub mod valuation;
