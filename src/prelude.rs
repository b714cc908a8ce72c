pub use crate::folders::Folder;
pub use crate::iter::ChunkedIterator;
