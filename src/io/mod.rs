mod opener;

#[cfg(test)]
pub use opener::RecordingOpener;
pub use opener::{DocumentOpener, SystemOpener};
