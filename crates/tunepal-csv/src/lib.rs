pub mod config;
pub mod source;

pub use config::CatalogConfig;
pub use source::{CsvSongSource, SONGLIST_FILE};

use thiserror::Error;
use tunepal_config::ConfigError;
use tunepal_core::CoreError;
use tunepal_core::services::CatalogService;

#[derive(Debug, Error)]
pub enum OpenCatalogError {
  #[error("config error: {0}")]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Core(#[from] CoreError),
}

/// Abre el catálogo desde `songlist.csv` en el directorio de trabajo actual.
pub fn open_catalog(page_size: i64) -> Result<CatalogService, CoreError> {
  CatalogService::load(&CsvSongSource::default_file(), page_size)
}

/// Igual que [`open_catalog`], con el tamaño de página de la sección `[catalog]`.
pub fn open_catalog_from_config() -> Result<CatalogService, OpenCatalogError> {
  let cfg = CatalogConfig::load()?;
  Ok(open_catalog(cfg.page_size.into())?)
}
