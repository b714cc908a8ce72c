//! Folder trait and its implementations.
use crate::errors::Result;
mod groups;
pub use self::groups::{Grouping, Groups};

/// The *Folder* trait abstracts eager reductions of an iterator.
///
/// It comes with three operations: `identity` creates an empty output,
/// `fold` adds one item to an output and `reduce` combines two outputs
/// built independently. Folders for which combining outputs has no
/// meaning return an error from `reduce`.
pub trait Folder {
    /// Type of items folded.
    type Item;
    /// Type of produced outputs.
    type Output;
    /// Return a new empty output.
    fn identity(&self) -> Self::Output;
    /// Add `item` at the end of `output`.
    fn fold(&self, output: Self::Output, item: Self::Item) -> Self::Output;
    /// Combine two outputs, `left` holding the items coming first.
    fn reduce(&self, left: Self::Output, right: Self::Output) -> Result<Self::Output>;
}
