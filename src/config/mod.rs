//! Configuration module for Ladle
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting carries a default, so running without a config file
//! (or with an empty one) is valid.
//!
//! # Example
//!
//! ```no_run
//! use ladle::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will visit at most {} pages", config.crawler.max_visits);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig};

// Re-export parser functions
pub use parser::load_config;
