mod catalog;
mod document;

pub use catalog::Catalog;
pub use document::DocumentRef;
