//! Track persistence and export

pub mod export;
pub mod store;
pub mod track;

pub use export::export_csv;
pub use store::{JsonTrackStore, TrackStore};
pub use track::TrackRow;
