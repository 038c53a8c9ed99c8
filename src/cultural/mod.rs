pub mod table;
pub mod client;

pub use client::*;
