use crate::io::atomic_write_str;
use crate::paths::{ConfigError, TunepalPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

// toml_edit para escribir preservando comentarios del usuario
use toml_edit::{DocumentMut, Item};

/// Acceso por secciones (`[catalog]`, ...) al fichero de configuración.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;

  /// Como `load_section`, pero devuelve `T::default()` si falta el fichero o la sección.
  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default;
}

pub struct TomlConfigBackend {
  paths: TunepalPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: TunepalPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &TunepalPaths {
    &self.paths
  }

  fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    Ok(Some(toml::from_str(&content)?))
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, value: toml::Value) -> Result<T, ConfigError> {
  value.try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let mut table = self.read_table()?.ok_or_else(|| {
      ConfigError::Io(std::io::Error::new(ErrorKind::NotFound, format!("{} not found", path.display())))
    })?;

    let value = table
      .remove(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {}", path.display())))?;

    decode_section(section, value)
  }

  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(mut table) = self.read_table()? else {
      debug!(section, "config file missing, using defaults");
      return Ok(T::default());
    };

    match table.remove(section) {
      Some(value) => decode_section(section, value),
      None => Ok(T::default()),
    }
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Leer config actual como DocumentMut o crear doc vacío si no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección con `toml` (serde) y reinterpretarla como tabla.
    let section_str =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 3) Reemplazar solo esa sección; el resto del documento queda intacto.
    doc[section] = section_item;

    atomic_write_str(&path, &doc.to_string())?;
    debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}
