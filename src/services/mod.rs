// Services module for business logic
pub mod dependency_bundler;
pub mod dependency_cache;
pub mod directory_initializer;
pub mod manifest_loader;
pub mod module_catalog;
pub mod module_exporter;
pub mod source_copier;
