pub mod page;
pub mod song;

pub use page::{PageSize, Pager};
pub use song::Song;
pub(crate) use song::YearThreshold;
