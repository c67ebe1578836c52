use std::fs;
use std::path::Path;
use modex::models::export_config::ExportConfig;
use modex::models::export_layout::ExportLayout;
use modex::models::module_name::ModuleName;
use modex::services::module_exporter::ModuleExporter;
use modex::utils::progress::Progress;
use tempfile::TempDir;

fn create_project(root: &Path, manifest: &str, cached: &[&str]) {
    let module = root.join("src").join("sample_module");
    fs::create_dir_all(&module).unwrap();
    fs::write(module.join("index.js"), "").unwrap();
    fs::write(root.join("package.json"), manifest).unwrap();

    for name in cached {
        let dir = root.join("node_modules").join(name);
        fs::create_dir_all(dir.join("lib")).unwrap();
        fs::write(dir.join("package.json"), format!(r#"{{"name":"{name}"}}"#)).unwrap();
        fs::write(dir.join("lib").join("index.js"), format!("// {name}")).unwrap();
    }
}

fn exporter(root: &Path) -> ModuleExporter {
    let layout = ExportLayout::resolve(root, &ExportConfig::default(), ModuleName::new("sample_module").unwrap());
    ModuleExporter::new(layout, Progress::silent())
}

fn staging(root: &Path) -> std::path::PathBuf {
    root.join("output").join("sample_module").join("node_modules")
}

/// Test that only cached dependencies are bundled
#[tokio::test]
async fn test_bundles_only_cached_dependencies() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project(root, r#"{"dependencies": {"foo": "1.0.0", "bar": "2.0.0"}}"#, &["foo"]);

    let report = exporter(root).export().await.unwrap();

    assert_eq!(report.bundled_names(), vec!["foo"]);
    assert_eq!(report.dependencies_skipped, vec!["bar"]);
    assert!(staging(root).join("foo").join("lib").join("index.js").is_file());
    assert!(!staging(root).join("bar").exists());
}

/// Test that cached packages not in the manifest are left out
#[tokio::test]
async fn test_ignores_undeclared_cached_packages() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project(
        root,
        r#"{"dependencies": {"foo": "1.0.0"}, "devDependencies": {"typescript": "5.0.0"}}"#,
        &["foo", "typescript", "transitive-dep"],
    );

    exporter(root).export().await.unwrap();

    let mut staged: Vec<String> = fs::read_dir(staging(root))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    staged.sort();
    assert_eq!(staged, vec!["foo"]);
}

/// Test that re-exporting removes files that no longer exist in the cache
#[tokio::test]
async fn test_reexport_leaves_no_stale_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project(root, r#"{"dependencies": {"foo": "1.0.0"}}"#, &["foo"]);
    let cached_foo = root.join("node_modules").join("foo");
    fs::write(cached_foo.join("old.js"), "old").unwrap();

    exporter(root).export().await.unwrap();
    assert!(staging(root).join("foo").join("old.js").is_file());

    // Upgrade foo in the cache
    fs::remove_file(cached_foo.join("old.js")).unwrap();
    fs::write(cached_foo.join("lib").join("index.js"), "// foo v2").unwrap();

    let report = exporter(root).export().await.unwrap();

    assert_eq!(report.replaced_count(), 1);
    assert!(!staging(root).join("foo").join("old.js").exists());
    assert_eq!(
        fs::read_to_string(staging(root).join("foo").join("lib").join("index.js")).unwrap(),
        "// foo v2"
    );
}

/// Test that scoped packages are bundled under their scope folder
#[tokio::test]
async fn test_bundles_scoped_packages() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project(
        root,
        r#"{"dependencies": {"@types/node": "^20.0.0", "@types/missing": "1.0.0"}}"#,
        &["@types/node"],
    );

    let report = exporter(root).export().await.unwrap();

    assert_eq!(report.bundled_names(), vec!["@types/node"]);
    assert_eq!(report.dependencies_skipped, vec!["@types/missing"]);
    assert!(staging(root).join("@types").join("node").join("package.json").is_file());
}
