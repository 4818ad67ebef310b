pub mod insight;
pub mod position;
pub mod valuation;
