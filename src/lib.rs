pub mod config;
pub mod feed;
pub mod session;

// Re-export specific items if needed for convenient access
pub use session::runtime::{SessionHandle, SessionRuntime};
pub use session::view::ViewSnapshot;
