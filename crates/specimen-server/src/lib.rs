//! Preview server for specimen examples.
//!
//! Serves component metadata and rendered examples over HTTP, watches the
//! registry for changes, and notifies connected previews over a WebSocket.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{router, PreviewServer, PreviewServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};
