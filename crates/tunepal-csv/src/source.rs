use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};
use tunepal_core::domain::Song;
use tunepal_core::ports::{SongSource, SourceError};

/// Nombre fijo del fichero de canciones, relativo al directorio de trabajo.
pub const SONGLIST_FILE: &str = "songlist.csv";

const TITLE_COLUMN: &str = "Song Clean";
const ARTIST_COLUMN: &str = "ARTIST CLEAN";
const YEAR_COLUMN: &str = "Release Year";

const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_YEAR: &str = "Unknown Year";

/// Implementación de `SongSource` sobre un CSV con fila de cabecera.
#[derive(Debug, Clone)]
pub struct CsvSongSource {
  path: PathBuf,
}

impl CsvSongSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn default_file() -> Self {
    Self::new(SONGLIST_FILE)
  }
}

/// Posición de las columnas que nos interesan, resuelta una vez por fichero.
///
/// Si una cabecera se repite, gana la última.
struct Columns {
  title: Option<usize>,
  artist: Option<usize>,
  year: Option<usize>,
}

impl Columns {
  fn resolve(headers: &StringRecord) -> Self {
    let find = |name: &str| {
      headers.iter().enumerate().filter(|(_, h)| h.trim_start_matches('\u{feff}') == name).map(|(i, _)| i).last()
    };

    Self { title: find(TITLE_COLUMN), artist: find(ARTIST_COLUMN), year: find(YEAR_COLUMN) }
  }

  fn song(&self, record: &StringRecord) -> Song {
    let cell = |idx: Option<usize>, fallback: &str| idx.and_then(|i| record.get(i)).unwrap_or(fallback).to_owned();

    Song::new(cell(self.title, UNKNOWN_TITLE), cell(self.artist, UNKNOWN_ARTIST), cell(self.year, UNKNOWN_YEAR))
  }
}

fn map_csv_error(path: &Path, err: csv::Error) -> SourceError {
  let message = err.to_string();
  match err.into_kind() {
    csv::ErrorKind::Io(e) if e.kind() == io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
    csv::ErrorKind::Io(e) => SourceError::Io(e),
    _ => SourceError::Malformed(format!("{}: {message}", path.display())),
  }
}

impl SongSource for CsvSongSource {
  fn load_songs(&self) -> Result<Vec<Song>, SourceError> {
    if !self.path.exists() {
      return Err(SourceError::NotFound(self.path.clone()));
    }

    // El reader es dueño del fichero; se cierra al salir de esta función.
    let mut reader = ReaderBuilder::new()
      .has_headers(true)
      .flexible(true)
      .from_path(&self.path)
      .map_err(|e| map_csv_error(&self.path, e))?;

    let columns = Columns::resolve(reader.headers().map_err(|e| map_csv_error(&self.path, e))?);
    if columns.title.is_none() || columns.artist.is_none() || columns.year.is_none() {
      debug!(path = %self.path.display(), "songlist is missing expected columns, using defaults");
    }

    let mut songs = Vec::new();
    for record in reader.records() {
      let record = record.map_err(|e| map_csv_error(&self.path, e))?;
      songs.push(columns.song(&record));
    }

    info!(path = %self.path.display(), rows = songs.len(), "songlist read");
    Ok(songs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;
  use tunepal_core::CoreError;
  use tunepal_core::services::CatalogService;

  fn write_csv(dir: &Path, contents: &[u8]) -> PathBuf {
    let path = dir.join(SONGLIST_FILE);
    fs::write(&path, contents).unwrap();
    path
  }

  #[test]
  fn reads_rows_in_order_by_header_name() {
    let tmp = tempdir().unwrap();
    let path = write_csv(
      tmp.path(),
      b"Release Year,ARTIST CLEAN,Song Clean,Extra\n\
        1985,a-ha,Take On Me,x\n\
        1991,Nirvana,\"Smells Like Teen Spirit, Live\",y\n",
    );

    let songs = CsvSongSource::new(&path).load_songs().unwrap();
    assert_eq!(
      songs,
      vec![
        Song::new("Take On Me", "a-ha", "1985"),
        Song::new("Smells Like Teen Spirit, Live", "Nirvana", "1991"),
      ]
    );
  }

  #[test]
  fn missing_columns_and_short_rows_use_defaults() {
    let tmp = tempdir().unwrap();
    let path = write_csv(tmp.path(), b"Song Clean,Release Year\nHello,2001\nBye\n");

    let songs = CsvSongSource::new(&path).load_songs().unwrap();
    assert_eq!(
      songs,
      vec![Song::new("Hello", UNKNOWN_ARTIST, "2001"), Song::new("Bye", UNKNOWN_ARTIST, UNKNOWN_YEAR)]
    );
  }

  #[test]
  fn repeated_header_uses_rightmost_column() {
    let tmp = tempdir().unwrap();
    let path = write_csv(tmp.path(), b"Song Clean,ARTIST CLEAN,Release Year,Song Clean\nOld,B,2000,New\n");

    let songs = CsvSongSource::new(&path).load_songs().unwrap();
    assert_eq!(songs, vec![Song::new("New", "B", "2000")]);
  }

  #[test]
  fn empty_cells_stay_empty() {
    let tmp = tempdir().unwrap();
    let path = write_csv(tmp.path(), b"Song Clean,ARTIST CLEAN,Release Year\n,,\n");

    let songs = CsvSongSource::new(&path).load_songs().unwrap();
    assert_eq!(songs, vec![Song::new("", "", "")]);
  }

  #[test]
  fn duplicate_rows_are_kept() {
    let tmp = tempdir().unwrap();
    let path = write_csv(tmp.path(), b"Song Clean,ARTIST CLEAN,Release Year\nA,B,2000\nA,B,2000\n");

    let catalog = CatalogService::load(&CsvSongSource::new(&path), 5).unwrap();
    assert_eq!(catalog.len(), 2);
  }

  #[test]
  fn missing_file_is_not_found() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join(SONGLIST_FILE);

    let err = CsvSongSource::new(&path).load_songs().unwrap_err();
    assert!(matches!(err, SourceError::NotFound(ref p) if p == &path));

    let err = CatalogService::load(&CsvSongSource::new(&path), 5).unwrap_err();
    assert!(matches!(err, CoreError::SourceNotFound(_)));
  }

  #[test]
  fn invalid_utf8_is_malformed() {
    let tmp = tempdir().unwrap();
    let path = write_csv(tmp.path(), b"Song Clean,ARTIST CLEAN,Release Year\n\xff\xfe,B,2000\n");

    let err = CsvSongSource::new(&path).load_songs().unwrap_err();
    assert!(matches!(err, SourceError::Malformed(_)));

    let err = CatalogService::load(&CsvSongSource::new(&path), 5).unwrap_err();
    assert!(matches!(err, CoreError::Source(_)));
  }

  #[test]
  fn loaded_catalog_supports_queries() {
    let tmp = tempdir().unwrap();
    let path = write_csv(
      tmp.path(),
      b"Song Clean,ARTIST CLEAN,Release Year\n\
        Song A,Artist A,2020\n\
        Song B,Artist B,2018\n\
        Song C,Artist C,2022\n\
        Song D,Artist D,Unknown Year\n",
    );

    let mut catalog = CatalogService::load(&CsvSongSource::new(&path), 2).unwrap();
    assert_eq!(catalog.get_songs().len(), 2);
    assert_eq!(catalog.search("ARTIST c"), vec![Song::new("Song C", "Artist C", "2022")]);
    assert_eq!(catalog.get_songs_since("2019").len(), 2);

    catalog.next_page();
    assert_eq!(catalog.get_songs()[0].title, "Song C");
  }
}
