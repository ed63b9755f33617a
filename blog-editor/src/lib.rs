pub mod api;
pub mod components;
pub mod config;
pub mod format;
pub mod interop;
pub mod session;
pub mod shortcuts;

pub use api::ApiError;
pub use components::*;
pub use config::{config, EditorConfig};
pub use session::EditorSession;
