//! Wishwall Storage
//!
//! - **types**: `Wish` and `WishId`
//! - **store**: `WishStore`, the JSON file persistence layer
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! Append:
//!   lock → read file → decode → push → encode (pretty) → write temp → rename → unlock
//!
//! Load:
//!   lock → read file → decode → unlock
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use wishwall::storage::{Wish, WishStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = WishStore::new("wishes.json");
//!     store.ensure_exists().await?;
//!
//!     store.append(Wish::new("Happy Birthday!", "2024-01-01T00:00:00Z")).await?;
//!
//!     let wishes = store.load().await?;
//!     println!("{} wishes stored", wishes.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use store::WishStore;
pub use types::{Wish, WishId, UNKNOWN_SENDER};
