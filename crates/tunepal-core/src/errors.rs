// crates/tunepal-core/src/errors.rs
use std::path::PathBuf;

use thiserror::Error;

/// Error genérico del núcleo de TunePal.
///
/// Las capas superiores (CLI, binarios de prueba, etc.) deberían mapear este
/// error a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  /// La fuente del catálogo no existe; la construcción del servicio aborta.
  #[error("song source not found: {}", .0.display())]
  SourceNotFound(PathBuf),

  /// La fuente existe pero no se pudo leer o decodificar.
  #[error("song source error: {0}")]
  Source(String),

  #[error("invalid argument: {0}")]
  InvalidArgument(String),
}
