pub mod interface;
pub mod lingo;
pub mod mymemory;
pub mod client;
pub mod factory;

pub use interface::*;
pub use client::*;
pub use factory::*;
