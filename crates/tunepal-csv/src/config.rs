use serde::{Deserialize, Serialize};
use tunepal_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use tunepal_core::domain::PageSize;

const SECTION: &str = "catalog";

/// Sección `[catalog]` de tunepal.toml.
///
/// El nombre del fichero de canciones no es configurable; solo el tamaño de
/// página inicial.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CatalogConfig {
  /// Canciones por página al abrir el catálogo. Debe ser positivo.
  #[serde(default)]
  pub page_size: PageSize,
}

impl CatalogConfig {
  /// Carga la sección (o los valores por defecto) y la vuelve a escribir para
  /// que el usuario la encuentre en el fichero.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = Self::load_from(&*CONFIG_BACKEND)?;
    cfg.save_to(&*CONFIG_BACKEND)?;
    Ok(cfg)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_with_default(SECTION)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }
}
