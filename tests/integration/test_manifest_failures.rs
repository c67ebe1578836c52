use std::fs;
use std::path::Path;
use modex::models::export_config::ExportConfig;
use modex::models::export_layout::ExportLayout;
use modex::models::module_name::ModuleName;
use modex::services::module_exporter::ModuleExporter;
use modex::utils::error::ExportError;
use modex::utils::progress::Progress;
use tempfile::TempDir;

fn create_project(root: &Path) {
    let module = root.join("src").join("sample_module");
    fs::create_dir_all(&module).unwrap();
    fs::write(module.join("index.js"), "// module").unwrap();
    fs::create_dir_all(root.join("node_modules").join("left-pad")).unwrap();
    fs::write(root.join("node_modules").join("left-pad").join("index.js"), "").unwrap();
}

fn exporter(root: &Path, config: &ExportConfig) -> ModuleExporter {
    let layout = ExportLayout::resolve(root, config, ModuleName::new("sample_module").unwrap());
    ModuleExporter::new(layout, Progress::silent())
}

fn output(root: &Path) -> std::path::PathBuf {
    root.join("output").join("sample_module")
}

/// Test that a missing manifest stops the export after the source copy
#[tokio::test]
async fn test_missing_manifest_fails_after_source_copy() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project(root);

    let result = exporter(root, &ExportConfig::default()).export().await;

    assert!(matches!(result, Err(ExportError::ManifestUnreadable { .. })));
    assert!(output(root).join("index.js").is_file());
    assert_eq!(fs::read_dir(output(root).join("node_modules")).unwrap().count(), 0);
}

/// Test that an empty manifest stops the export before bundling
#[tokio::test]
async fn test_empty_manifest_fails_before_bundling() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project(root);
    fs::write(root.join("package.json"), "").unwrap();

    let result = exporter(root, &ExportConfig::default()).export().await;

    let err = result.unwrap_err();
    assert!(err.is_manifest_error());
    assert!(matches!(err, ExportError::ManifestEmpty(_)));
    assert!(output(root).join("index.js").is_file());
    assert!(!output(root).join("node_modules").join("left-pad").exists());
}

/// Test the missing "dependencies" field policy
#[tokio::test]
async fn test_manifest_without_dependencies_field() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project(root);
    fs::write(root.join("package.json"), r#"{"name": "host", "version": "1.0.0"}"#).unwrap();

    let result = exporter(root, &ExportConfig::default()).export().await;
    assert!(matches!(result, Err(ExportError::MalformedManifest { .. })));

    let config = ExportConfig {
        allow_missing_dependencies: true,
        ..Default::default()
    };
    let report = exporter(root, &config).export().await.unwrap();
    assert!(report.dependencies_bundled.is_empty());
    assert!(report.dependencies_skipped.is_empty());
}

/// Test that declared dependencies without a node_modules folder are reported
#[tokio::test]
async fn test_dependencies_without_cache_folder() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project(root);
    fs::remove_dir_all(root.join("node_modules")).unwrap();
    fs::write(root.join("package.json"), r#"{"dependencies": {"left-pad": "1.3.0"}}"#).unwrap();

    let result = exporter(root, &ExportConfig::default()).export().await;
    assert!(matches!(result, Err(ExportError::ConfigError(msg)) if msg.contains("Dependency cache")));
}
