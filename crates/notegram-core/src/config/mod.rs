//! Configuration system — schema, loading, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use notegram_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Channels: {}", cfg.channels.len());
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{get_config_path, load_config, save_config, try_load_config_file};
pub use schema::Config;
