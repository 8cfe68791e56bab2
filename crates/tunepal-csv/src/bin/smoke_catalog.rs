use tracing::info;
use tunepal_csv::open_catalog_from_config;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  // Lee songlist.csv del directorio actual
  let mut catalog = open_catalog_from_config()?;
  info!(songs = catalog.len(), page_size = catalog.page_size(), "catalog ready");

  for song in catalog.get_songs() {
    println!("{song}");
  }

  if let Some(query) = std::env::args().nth(1) {
    println!("-- search {query:?}");
    for song in catalog.search(&query) {
      println!("{song}");
    }
  }

  catalog.next_page();
  println!("-- page {}", catalog.current_page_index());
  for song in catalog.get_songs() {
    println!("{song}");
  }

  Ok(())
}
