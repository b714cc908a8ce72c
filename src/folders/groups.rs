//! Eager grouping into fixed capacity vectors.
use super::Folder;
use crate::errors::{Error, Result};
use crate::ChunkSize;
use std::marker::PhantomData;
use std::slice;
use std::vec;

/// Groups never reserve more than this many slots up front.
const MAX_PREALLOCATION: usize = 1024;

/// Fully realized chunks: every group but the last holds exactly
/// `chunk_size` elements.
///
/// # Example
///
/// ```
/// use lazy_chunks::prelude::*;
/// let groups = (1..=7).collect_groups(3).unwrap();
/// assert_eq!(groups.into_inner(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups<T> {
    size: ChunkSize,
    groups: Vec<Vec<T>>,
}

impl<T> Groups<T> {
    /// Create empty groups of given capacity.
    pub fn new(size: ChunkSize) -> Self {
        Groups {
            size,
            groups: Vec::new(),
        }
    }

    /// Append `item` to the last group, opening a new one when it is full.
    pub fn push(&mut self, item: T) {
        let size = self.size.get();
        match self.groups.last_mut() {
            Some(last) if last.len() < size => last.push(item),
            _ => {
                let mut group = Vec::with_capacity(size.min(MAX_PREALLOCATION));
                group.push(item);
                self.groups.push(group);
            }
        }
    }

    /// Merging groupings is never supported.
    ///
    /// Each group boundary depends on the absolute position of elements in
    /// the whole input, two partial groupings cannot be glued back together.
    pub fn merge(self, _other: Self) -> Result<Self> {
        Err(Error::UnsupportedMerge)
    }

    /// Return the capacity of each group.
    pub fn chunk_size(&self) -> ChunkSize {
        self.size
    }

    /// Return the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Tell if no element was pushed yet.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate on all groups.
    pub fn iter(&self) -> slice::Iter<'_, Vec<T>> {
        self.groups.iter()
    }

    /// Give back the groups.
    pub fn into_inner(self) -> Vec<Vec<T>> {
        self.groups
    }
}

impl<T> Extend<T> for Groups<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for Groups<T> {
    type Item = Vec<T>;
    type IntoIter = vec::IntoIter<Vec<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Groups<T> {
    type Item = &'a Vec<T>;
    type IntoIter = slice::Iter<'a, Vec<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Folder collecting items into `Groups`.
/// Its reduction always fails with `Error::UnsupportedMerge`.
#[derive(Debug, Clone, Copy)]
pub struct Grouping<T> {
    size: ChunkSize,
    phantom: PhantomData<fn(T)>,
}

impl<T> Grouping<T> {
    /// Create a folder producing groups of given capacity.
    pub fn new(size: ChunkSize) -> Self {
        Grouping {
            size,
            phantom: PhantomData,
        }
    }
}

impl<T> Folder for Grouping<T> {
    type Item = T;
    type Output = Groups<T>;
    fn identity(&self) -> Self::Output {
        Groups::new(self.size)
    }
    fn fold(&self, mut output: Self::Output, item: Self::Item) -> Self::Output {
        output.push(item);
        output
    }
    fn reduce(&self, left: Self::Output, right: Self::Output) -> Result<Self::Output> {
        left.merge(right)
    }
}
