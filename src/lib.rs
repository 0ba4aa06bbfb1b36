//! # Wishwall
//!
//! A small HTTP service that collects short text wishes (birthday messages and
//! the like), keeps them in a single JSON file and shows them on a read-only,
//! self-refreshing HTML dashboard.
//!
//! ## Modules
//!
//! - [`storage`]: JSON file persistence for the wish collection
//! - [`dashboard`]: HTML rendering of the collection
//! - [`api`]: HTTP API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wishwall::storage::{Wish, WishStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = WishStore::new("wishes.json");
//!     store.ensure_exists().await?;
//!
//!     let wish = store
//!         .append(Wish::new("Happy Birthday!", "2024-01-01T00:00:00Z").sent_by("docs"))
//!         .await?;
//!     println!("Stored wish {}", wish.id);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod storage;

// Re-export top-level types for convenience
pub use storage::{StorageError, StorageResult, Wish, WishId, WishStore};

pub use dashboard::{escape_html, render_dashboard, DashboardOptions};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig, StorageConfig};
