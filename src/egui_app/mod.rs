//! egui Native Desktop App Module
//!
//! The storefront client: an egui/eframe window over the eMarket REST API.
//!
//! # Architecture
//!
//! - **`config`** - Configuration loading (file, environment, data paths)
//! - **`api`** - HTTP client for the auth endpoints
//! - **`session`** - Durable session token / user id store
//! - **`tasks`** - Runs requests on a tokio runtime off the UI thread
//! - **`navigation`** - Routes and the history stack
//! - **`effects`** - What screens ask the shell to do
//! - **`screens`** - Per-route controllers, no I/O
//! - **`state`** - `AppState`, which ties all of the above together
//! - **`views`** / **`theme`** - egui rendering
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs        - Module exports and documentation
//! ├── main.rs       - Main application entry point
//! ├── config.rs     - Configuration loading
//! ├── api.rs        - Auth API client
//! ├── session.rs    - Session store
//! ├── tasks.rs      - Request execution
//! ├── navigation.rs - Routes
//! ├── effects.rs    - Effects and notices
//! ├── screens/      - Screen controllers
//! ├── state/        - Application state
//! ├── views/        - egui views
//! └── theme/        - Colors and frames
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop client:
//! // cargo run --bin emarket
//! ```

pub mod api;
pub mod config;
pub mod effects;
pub mod navigation;
pub mod screens;
pub mod session;
pub mod state;
pub mod tasks;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Config;
pub use effects::{Effect, Notice, PendingAction};
pub use navigation::{CatalogMode, Navigator, Route};
pub use session::{Backend, KeyValueStore, MemoryStore, SessionStore, SqliteStore, StorageError};
pub use state::AppState;
pub use tasks::{ApiReply, ApiRequest, TaskRunner};
