//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP client (timeout and user agent)
//! - Logger

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
