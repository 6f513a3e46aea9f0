pub mod allowlist;
pub mod policy_config;
pub mod pool;
pub mod types;

pub use allowlist::*;
pub use policy_config::*;
pub use pool::*;
pub use types::*;
