use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Variable de entorno que reubica la configuración bajo `<base>/config`.
pub const BASE_DIR_ENV: &str = "TUNEPAL_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct TunepalPaths {
  pub config_dir: PathBuf,
}

impl TunepalPaths {
  /// Resuelve el directorio de configuración y lo crea si no existe.
  pub fn new() -> Result<Self, ConfigError> {
    let paths = match std::env::var_os(BASE_DIR_ENV) {
      Some(env_base) => Self::under(PathBuf::from(env_base)),
      None => {
        let proj_dirs = ProjectDirs::from("com", "tunepal", "tunepal").ok_or(ConfigError::Directories)?;
        Self { config_dir: proj_dirs.config_dir().to_path_buf() }
      }
    };

    std::fs::create_dir_all(&paths.config_dir)?;

    Ok(paths)
  }

  /// Estructura bajo `base`, sin tocar el disco.
  pub fn under(base: PathBuf) -> Self {
    Self { config_dir: base.join("config") }
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("tunepal.toml")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::ffi::OsString;
  use tempfile::tempdir;

  /// Ejecuta `f` con `BASE_DIR_ENV` apuntando a `base` y restaura el valor previo
  /// aunque `f` entre en pánico.
  fn with_base_dir<R>(base: &std::path::Path, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<OsString>);

    impl Drop for Restore {
      fn drop(&mut self) {
        match self.0.take() {
          Some(prev) => unsafe { std::env::set_var(BASE_DIR_ENV, prev) },
          None => unsafe { std::env::remove_var(BASE_DIR_ENV) },
        }
      }
    }

    let _restore = Restore(std::env::var_os(BASE_DIR_ENV));
    unsafe { std::env::set_var(BASE_DIR_ENV, base) };
    f()
  }

  #[test]
  fn base_dir_override_creates_only_config_dir() {
    let tmp = tempdir().unwrap();

    let paths = with_base_dir(tmp.path(), TunepalPaths::new).unwrap();

    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert_eq!(paths.config_file(), tmp.path().join("config").join("tunepal.toml"));
    assert!(paths.config_dir.is_dir());

    let mut created: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    created.sort();
    assert_eq!(created, vec![OsString::from("config")]);
  }

  #[test]
  fn under_does_not_touch_disk() {
    let tmp = tempdir().unwrap();
    let paths = TunepalPaths::under(tmp.path().join("nowhere"));

    assert_eq!(paths.config_dir, tmp.path().join("nowhere").join("config"));
    assert!(!paths.config_dir.exists());
  }
}
