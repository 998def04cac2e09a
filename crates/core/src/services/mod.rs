pub mod chart_service;
pub mod fetch_service;
pub mod statistics_service;
pub mod transaction_service;
