mod backend;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use paths::{BASE_DIR_ENV, ConfigError, TunepalPaths};

use once_cell::sync::Lazy;

// Singleton de paths (TUNEPAL_BASE_DIR / system)
pub static PATHS: Lazy<TunepalPaths> = Lazy::new(|| TunepalPaths::detect().expect("failed to init TunepalPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
