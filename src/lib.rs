pub mod app;
pub mod cli;
pub mod style;

// Re-export commonly used types
pub use app::{EditorApp, FatalError};
pub use cli::Cli;
