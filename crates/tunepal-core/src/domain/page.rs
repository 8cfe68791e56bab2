use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Número de elementos por página. Siempre mayor que cero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
  /// Tamaño de página usado cuando el llamador no indica otro.
  pub const DEFAULT: PageSize = PageSize(NonZeroUsize::new(5).unwrap());

  /// Valida el tamaño pedido. Cero o negativo es `InvalidArgument`.
  pub fn new(page_size: i64) -> Result<Self, CoreError> {
    usize::try_from(page_size)
      .ok()
      .and_then(NonZeroUsize::new)
      .map(PageSize)
      .ok_or_else(|| CoreError::InvalidArgument(format!("page size must be a positive integer, got {page_size}")))
  }

  pub fn get(self) -> usize {
    self.0.get()
  }
}

impl Default for PageSize {
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl TryFrom<i64> for PageSize {
  type Error = CoreError;

  fn try_from(value: i64) -> Result<Self, Self::Error> {
    PageSize::new(value)
  }
}

impl From<PageSize> for i64 {
  fn from(size: PageSize) -> Self {
    i64::try_from(size.get()).unwrap_or(i64::MAX)
  }
}

impl fmt::Display for PageSize {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Cursor de paginación: tamaño de página + índice de la página actual.
///
/// El índice no se acota al cambiar el tamaño; si queda más allá del final,
/// las ventanas simplemente salen vacías.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
  page_size: PageSize,
  current_page_index: usize,
}

impl Pager {
  pub fn new(page_size: PageSize) -> Self {
    Self { page_size, current_page_index: 0 }
  }

  pub fn page_size(&self) -> PageSize {
    self.page_size
  }

  pub fn current_page_index(&self) -> usize {
    self.current_page_index
  }

  pub fn set_page_size(&mut self, page_size: PageSize) {
    self.page_size = page_size;
  }

  /// Devuelve la ventana `[índice * tamaño, índice * tamaño + tamaño)` de
  /// `items`, recortada a sus límites.
  pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
    let size = self.page_size.get();
    let first = self.current_page_index.saturating_mul(size).min(items.len());
    let last = first.saturating_add(size).min(items.len());
    &items[first..last]
  }

  /// Avanza solo si la página siguiente empieza antes de `total`.
  pub fn next(&mut self, total: usize) {
    let next_start = self.current_page_index.saturating_add(1).saturating_mul(self.page_size.get());
    if next_start < total {
      self.current_page_index += 1;
    }
  }

  pub fn previous(&mut self) {
    self.current_page_index = self.current_page_index.saturating_sub(1);
  }
}

impl Default for Pager {
  fn default() -> Self {
    Self::new(PageSize::DEFAULT)
  }
}
