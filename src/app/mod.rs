pub mod api;
pub mod cli;
pub mod commit;
mod context;
pub mod preflight;
pub mod settings;
pub mod summary;
pub mod wizard;

pub use context::AppContext;
