use std::path::PathBuf;

pub fn conformance_dir() -> PathBuf {
    std::env::var("IODEF_CONFORMANCE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("conformance"))
}

/// Read and parse one suite file, panicking with the path if it is missing.
pub fn load_suite<T: serde::de::DeserializeOwned>(relative: &str) -> Vec<T> {
    let suite_path = conformance_dir().join(relative);
    assert!(
        suite_path.exists(),
        "Conformance fixture not found: {:?}",
        suite_path
    );
    let content = std::fs::read_to_string(&suite_path).unwrap();
    serde_saphyr::from_str(&content).unwrap()
}
