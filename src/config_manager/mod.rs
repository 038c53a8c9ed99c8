pub mod main;
pub mod system;
pub mod gemini;
pub mod translator;
pub mod language;
pub mod cultural;
pub mod utils;

pub use main::*;
pub use system::*;
pub use gemini::*;
pub use translator::*;
pub use language::*;
pub use cultural::*;
