pub mod burst_pool;
pub mod manager_config;

pub use burst_pool::*;
pub use manager_config::*;
