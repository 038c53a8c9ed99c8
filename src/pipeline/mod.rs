pub mod translation;
pub mod analysis;

pub use translation::*;
pub use analysis::*;
