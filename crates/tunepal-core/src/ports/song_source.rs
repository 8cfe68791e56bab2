use std::path::PathBuf;

use crate::domain::Song;
use crate::errors::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
  #[error("source not found: {}", .0.display())]
  NotFound(PathBuf),
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("malformed source: {0}")]
  Malformed(String),
}

impl From<SourceError> for CoreError {
  fn from(err: SourceError) -> Self {
    match err {
      SourceError::NotFound(path) => CoreError::SourceNotFound(path),
      other => CoreError::Source(other.to_string()),
    }
  }
}

/// Puerto de entrada del catálogo: de dónde salen las canciones iniciales.
///
/// Se lee una sola vez, al construir el servicio. Las implementaciones no
/// deben deduplicar: cada fila de la fuente es una canción.
pub trait SongSource {
  fn load_songs(&self) -> Result<Vec<Song>, SourceError>;
}
