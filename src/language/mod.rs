pub mod interface;
pub mod whatlang_detector;
pub mod lingua_model;
pub mod detector;

pub use interface::*;
pub use detector::*;
