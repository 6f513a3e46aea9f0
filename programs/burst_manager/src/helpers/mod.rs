pub mod access;
pub mod math;
pub mod transfer;

pub use access::*;
pub use math::*;
pub use transfer::*;
