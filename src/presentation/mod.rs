pub mod cli;
pub mod config;
pub mod format;
pub mod handlers;
pub mod state;

pub use cli::{Cli, Command, ExportFormat};
pub use config::{Environment, Settings};
pub use format::format_file_size;
pub use state::AppState;
