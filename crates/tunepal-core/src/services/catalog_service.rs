use tracing::{debug, info, warn};

use crate::domain::{PageSize, Pager, Song, YearThreshold};
use crate::errors::CoreError;
use crate::ports::SongSource;

/// Catálogo de canciones en memoria, consultado por páginas.
///
/// La colección se carga una vez al construir el servicio y solo crece con
/// [`CatalogService::add_song`]. Cada consulta devuelve una copia de la página,
/// nunca una referencia a la colección interna.
#[derive(Debug, Clone)]
pub struct CatalogService {
  songs: Vec<Song>,
  pager: Pager,
}

impl CatalogService {
  /// Carga todas las filas de `source` y arranca en la página 0.
  ///
  /// El tamaño de página se valida antes de leer la fuente. Las filas se
  /// guardan tal cual: los duplicados de la fuente se mantienen.
  pub fn load<S: SongSource + ?Sized>(source: &S, page_size: i64) -> Result<Self, CoreError> {
    let page_size = PageSize::new(page_size)?;

    let songs = source.load_songs().map_err(|e| {
      warn!("catalog source failed: {e}");
      CoreError::from(e)
    })?;

    info!(songs = songs.len(), %page_size, "catalog loaded");
    Ok(Self { songs, pager: Pager::new(page_size) })
  }

  /// Construye el catálogo con filas que el llamador ya tiene. Sin deduplicar.
  pub fn from_songs(songs: Vec<Song>, page_size: i64) -> Result<Self, CoreError> {
    let page_size = PageSize::new(page_size)?;
    Ok(Self { songs, pager: Pager::new(page_size) })
  }

  // -------- COMMAND (escritura) --------

  /// Añade la canción al final salvo que ya exista una igual.
  pub fn add_song(
    &mut self,
    title: impl Into<String>,
    artist: impl Into<String>,
    release_year: impl Into<String>,
  ) -> bool {
    let candidate = Song::new(title, artist, release_year);

    if self.songs.contains(&candidate) {
      debug!(song = %candidate, "duplicate song rejected");
      return false;
    }

    self.songs.push(candidate);
    true
  }

  pub fn next_page(&mut self) {
    self.pager.next(self.songs.len());
  }

  pub fn previous_page(&mut self) {
    self.pager.previous();
  }

  /// Cambia el tamaño de página. El índice de página actual no se toca.
  pub fn set_page_size(&mut self, page_size: i64) -> Result<(), CoreError> {
    let page_size = PageSize::new(page_size).inspect_err(|e| warn!("{e}"))?;
    self.pager.set_page_size(page_size);
    Ok(())
  }

  // -------- QUERY (lectura) --------

  /// Página actual del catálogo completo.
  pub fn get_songs(&self) -> Vec<Song> {
    self.pager.window(&self.songs).to_vec()
  }

  /// Busca `query` en título o artista sin distinguir mayúsculas, paginado.
  ///
  /// Una consulta en blanco no devuelve nada (no la primera página de todo).
  pub fn search(&self, query: &str) -> Vec<Song> {
    if query.trim().is_empty() {
      return Vec::new();
    }

    let needle = query.to_lowercase();
    let hits: Vec<&Song> = self.songs.iter().filter(|song| song.matches_lowercase(&needle)).collect();

    self.pager.window(&hits).iter().map(|&song| song.clone()).collect()
  }

  /// Canciones con año numérico estrictamente mayor que `release_year`, paginado.
  ///
  /// Si el umbral no es un entero, la página sale vacía. No hay límite de
  /// cifras ni en el umbral ni en los años del catálogo.
  pub fn get_songs_since(&self, release_year: &str) -> Vec<Song> {
    let Some(threshold) = YearThreshold::parse(release_year) else {
      debug!(release_year, "ignoring non-numeric year threshold");
      return Vec::new();
    };

    let hits: Vec<&Song> = self.songs.iter().filter(|song| song.released_after(&threshold)).collect();

    self.pager.window(&hits).iter().map(|&song| song.clone()).collect()
  }

  pub fn page_size(&self) -> usize {
    self.pager.page_size().get()
  }

  pub fn current_page_index(&self) -> usize {
    self.pager.current_page_index()
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }
}
