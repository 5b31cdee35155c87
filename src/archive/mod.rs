mod category;
mod entry;
pub(crate) mod loader;
mod state;

pub use category::Category;
pub use entry::MediaEntry;
pub use loader::{load, ContentSource, HttpContentSource, DEFAULT_BASE_URL};
pub use state::LoadState;
