pub mod traits;

// API implementations
pub mod http;
