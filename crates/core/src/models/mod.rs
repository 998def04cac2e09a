pub mod chart;
pub mod fetch;
pub mod filter;
pub mod month;
pub mod settings;
pub mod slot;
pub mod statistics;
pub mod transaction;
