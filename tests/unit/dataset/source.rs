use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "tagbloom_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn site_paths_normalize() {
    assert_eq!(
        normalize_site_path(DEFAULT_DATA_PATH).unwrap(),
        "assets/data/temp-datasets.json"
    );
    assert_eq!(normalize_site_path("./a//b\\c.json").unwrap(), "a/b/c.json");
    assert!(normalize_site_path("/a/../b.json").is_err());
    assert!(normalize_site_path("/").is_err());
}

#[test]
fn file_source_reads_under_site_root() {
    let root = temp_dir("file_source");
    std::fs::create_dir_all(root.join("assets/data")).unwrap();
    std::fs::write(
        root.join("assets/data/temp-datasets.json"),
        r#"[{"id": "a", "tags": ["x"]}]"#,
    )
    .unwrap();

    let src = FileSource::under_site_root(&root, DEFAULT_DATA_PATH).unwrap();
    assert!(src.describe().contains("temp-datasets.json"));
    let ds = src.fetch().unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds[0].id(), Some("a"));

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn missing_file_is_an_error_with_path() {
    let src = FileSource::new(temp_dir("missing").join("nope.json"));
    let err = src.fetch().unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn static_source_returns_its_list() {
    let src = StaticSource::new(vec![Dataset::default(), Dataset::default()]);
    assert_eq!(src.fetch().unwrap().len(), 2);
    let shared = std::sync::Arc::new(src);
    assert_eq!(shared.fetch().unwrap().len(), 2);
}
