pub mod clear_target_range;
pub mod compute_fee_override;
pub mod configure_pool;
pub mod fund_reserve;
pub mod get_pool_snapshot;
pub mod initialize_policy;
pub mod initialize_pool;
pub mod issue_rebate;
pub mod report_reserve_delta;
pub mod set_jit_window;
pub mod set_liquidity_policy;
pub mod set_pause;
pub mod set_pool_mode;
pub mod set_target_range;
pub mod update_liquidity_allowlist;
pub mod validate_liquidity_change;
pub mod withdraw_reserve;

pub use clear_target_range::*;
pub use compute_fee_override::*;
pub use configure_pool::*;
pub use fund_reserve::*;
pub use get_pool_snapshot::*;
pub use initialize_policy::*;
pub use initialize_pool::*;
pub use issue_rebate::*;
pub use report_reserve_delta::*;
pub use set_jit_window::*;
pub use set_liquidity_policy::*;
pub use set_pause::*;
pub use set_pool_mode::*;
pub use set_target_range::*;
pub use update_liquidity_allowlist::*;
pub use validate_liquidity_change::*;
pub use withdraw_reserve::*;
