//! Configuration system for tripbook.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TRIPBOOK_*`)
//! 3. Private project config (`tripbook.local.yaml`)
//! 4. Project config (`tripbook.yaml`)
//! 5. User config (`~/.tripbook/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use tripbook::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("storing reservations in {}", config.store_backend());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{
    Config, CostPolicy, CostRange, OutputFormat, PricedKind, PricingConfig, StorageBackend,
    StoreConfig,
};
pub use validator::ConfigValidator;
