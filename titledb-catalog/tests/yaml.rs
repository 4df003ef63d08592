use std::fs;
use std::path::Path;

use tempfile::TempDir;
use titledb_catalog::{CatalogError, load_region_table, load_translation_table};

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn load_translation_table_from_file() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "titles.yaml",
        r#"
- ["Splatoon", "喷射战士"]
- ["Pikmin 3", "皮克敏3"]
- ["Splatoon", "斯普拉遁"]
"#,
    );

    let table = load_translation_table(&tmp.path().join("titles.yaml")).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("Splatoon"), Some("斯普拉遁"));
    assert_eq!(table.get("Pikmin 3"), Some("皮克敏3"));
    assert_eq!(table.duplicates(), ["Splatoon"]);
}

#[test]
fn load_region_table_from_file() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "regions.yaml",
        r#"
unknown: Unknown
codes:
  "E": US
  "j": Japan
  "N": Korea
"#,
    );

    let table = load_region_table(&tmp.path().join("regions.yaml")).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.classify("ARDE01"), "US");
    assert_eq!(table.classify("ARDJ01"), "Japan");
    assert_eq!(table.classify("ARDN01"), "Korea");
    assert_eq!(table.classify("ARDP01"), "Unknown");
}

#[test]
fn missing_file_reports_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nope.yaml");
    let err = load_translation_table(&path).unwrap_err();
    match err {
        CatalogError::Io { path: p, .. } => assert!(p.ends_with("nope.yaml")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "regions.yaml", "codes: [not, a, map\n");
    let err = load_region_table(&tmp.path().join("regions.yaml")).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}
