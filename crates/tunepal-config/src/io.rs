use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe `contents` en un `.tmp` hermano y lo renombra sobre `path`.
///
/// Quien lea verá el fichero viejo o el nuevo, nunca uno a medias. Si algo
/// falla antes del rename, el `.tmp` se borra.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  let tmp_path = path.with_extension("tmp");

  let written = (|| {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
    fs::rename(&tmp_path, path)
  })();

  if written.is_err() {
    let _ = fs::remove_file(&tmp_path);
  }

  written
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn replaces_existing_file_and_leaves_no_temp() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("nested").join("tunepal.toml");

    atomic_write_str(&path, "a = 1\n").unwrap();
    atomic_write_str(&path, "a = 2\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a = 2\n");
    assert!(!path.with_extension("tmp").exists());
  }
}
