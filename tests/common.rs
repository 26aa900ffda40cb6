//! Test utilities & fixtures.
//! World documents used by the integration tests live under `tests/data`.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Path to a fixture under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Write `contents` to a fresh file named `name` inside a temp dir. Keep the
/// returned dir alive for as long as the file is needed.
#[allow(dead_code)] // not every test binary writes its own documents
pub fn write_world(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create world file");
    file.write_all(contents.as_bytes()).expect("write world file");
    (dir, path)
}
