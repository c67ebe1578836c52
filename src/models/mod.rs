// Models module for data structures
pub mod export_config;
pub mod export_layout;
pub mod export_report;
pub mod manifest;
pub mod module_name;
