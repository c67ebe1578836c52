// Shared utilities: errors, configuration, validation, output

pub mod config;
pub mod error;
pub mod fs_utils;
pub mod logging;
pub mod progress;
pub mod validation;
