pub mod config_manager;
pub mod cultural;
pub mod genai;
pub mod heuristics;
pub mod language;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod translate;

pub use routes::build_router;
pub use state::AppState;
