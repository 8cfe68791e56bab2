use std::cmp::Ordering;
use std::fmt;

/// La Canción (Song): una entrada del catálogo.
///
/// Dos canciones son iguales si coinciden título, artista y año, comparados
/// de forma exacta (sensible a mayúsculas).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
  /// El título de la canción.
  pub title: String,
  /// El intérprete principal.
  pub artist: String,
  /// Año de lanzamiento tal como viene en la fuente; no siempre es numérico.
  pub release_year: String,
}

impl Song {
  pub fn new(title: impl Into<String>, artist: impl Into<String>, release_year: impl Into<String>) -> Self {
    Self { title: title.into(), artist: artist.into(), release_year: release_year.into() }
  }

  /// `true` si el año es numérico (solo dígitos ASCII) y mayor que `threshold`.
  pub(crate) fn released_after(&self, threshold: &YearThreshold) -> bool {
    let year = self.release_year.as_str();
    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
      return false;
    }

    if threshold.negative {
      return true;
    }

    cmp_digits(strip_zeros(year), &threshold.magnitude) == Ordering::Greater
  }

  /// `true` si `needle` (ya en minúsculas) aparece en el título o el artista.
  pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
    self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
  }
}

/// Umbral entero para filtrar por año, sin límite de tamaño.
///
/// Se guarda como signo + dígitos sin ceros a la izquierda, así que un año de
/// 60 cifras se compara igual de bien que uno de 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct YearThreshold {
  negative: bool,
  magnitude: String,
}

impl YearThreshold {
  /// Admite espacios alrededor y un signo `+`/`-` opcional. `None` si no es un entero.
  pub(crate) fn parse(input: &str) -> Option<Self> {
    let input = input.trim();
    let (negative, digits) = match input.as_bytes().first() {
      Some(b'-') => (true, &input[1..]),
      Some(b'+') => (false, &input[1..]),
      _ => (false, input),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
      return None;
    }

    let magnitude = strip_zeros(digits).to_owned();
    // -0 es 0
    let negative = negative && !magnitude.is_empty();
    Some(Self { negative, magnitude })
  }
}

fn strip_zeros(digits: &str) -> &str {
  digits.trim_start_matches('0')
}

/// Compara dos cadenas de dígitos sin ceros a la izquierda como números.
fn cmp_digits(a: &str, b: &str) -> Ordering {
  a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl fmt::Display for Song {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Song({}, {}, {})", self.title, self.artist, self.release_year)
  }
}
