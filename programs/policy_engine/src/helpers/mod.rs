pub mod access;
pub mod fee;
pub mod gating;
pub mod oracle;
pub mod reserve;

pub use access::*;
pub use fee::*;
pub use gating::*;
pub use oracle::*;
pub use reserve::*;
