pub mod configure_burst_pool;
pub mod execute_burst;
pub mod flash_burst;
pub mod initialize_manager;
pub mod settle_burst;
pub mod update_burst_pool;

pub use configure_burst_pool::*;
pub use execute_burst::*;
pub use flash_burst::*;
pub use initialize_manager::*;
pub use settle_burst::*;
pub use update_burst_pool::*;
