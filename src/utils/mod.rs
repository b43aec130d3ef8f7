pub mod codec;
pub mod pda;

pub use codec::*;
pub use pda::*;
