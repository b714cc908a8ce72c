//! One chunk of a `Chunked` iterator.
use crate::errors::{Error, Result};
use crate::iter::cursor::Cursor;
use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Weak;

/// Sequential view on at most `chunk_size` consecutive elements of the source.
///
/// The chunk does not own the source: it reads through a weak link to the
/// `Chunked` adaptor which produced it. Once the adaptor moves on to the next
/// chunk (or is dropped) this chunk becomes stale and yields nothing.
pub struct Chunk<I: Iterator> {
    pub(crate) cursor: Weak<RefCell<Cursor<I>>>,
    pub(crate) generation: usize,
}

impl<I: Iterator> Chunk<I> {
    /// Position of this chunk in the outer iterator, starting at 0.
    pub fn index(&self) -> usize {
        self.generation - 1
    }

    /// Tell if this chunk is still the one the adaptor reads for.
    pub fn is_live(&self) -> bool {
        self.cursor.upgrade().map_or(false, |shared| {
            let current = shared.borrow().generation();
            current == self.generation
        })
    }

    /// Like `next` but report reads on a stale chunk as an error
    /// instead of ending silently.
    ///
    /// # Example
    ///
    /// ```
    /// use lazy_chunks::prelude::*;
    /// use lazy_chunks::Error;
    /// let mut chunks = (0..10).chunked(3).unwrap();
    /// let mut first = chunks.next().unwrap();
    /// assert_eq!(first.try_next(), Ok(Some(0)));
    /// let _second = chunks.next().unwrap();
    /// assert_eq!(
    ///     first.try_next(),
    ///     Err(Error::StaleChunk { chunk: 0, current: Some(1) })
    /// );
    /// ```
    pub fn try_next(&mut self) -> Result<Option<I::Item>> {
        let shared = self.cursor.upgrade().ok_or(Error::StaleChunk {
            chunk: self.index(),
            current: None,
        })?;
        let mut cursor = shared.borrow_mut();
        if cursor.generation() != self.generation {
            return Err(Error::StaleChunk {
                chunk: self.index(),
                current: cursor.generation().checked_sub(1),
            });
        }
        Ok(cursor.pull(self.generation))
    }
}

impl<I: Iterator> Iterator for Chunk<I> {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let shared = self.cursor.upgrade()?;
        let mut cursor = shared.borrow_mut();
        cursor.pull(self.generation)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor.upgrade() {
            Some(shared) => {
                let cursor = shared.borrow();
                cursor.chunk_hint(self.generation)
            }
            None => (0, Some(0)),
        }
    }
}

impl<I: Iterator> FusedIterator for Chunk<I> {}

impl<I: Iterator> fmt::Debug for Chunk<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("index", &self.index())
            .field("live", &self.is_live())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::Error;

    #[test]
    fn superseded_chunk_is_stale() {
        let mut chunks = (0..9).chunked(3).unwrap();
        let mut first = chunks.next().unwrap();
        assert!(first.is_live());
        assert_eq!(first.index(), 0);
        let mut second = chunks.next().unwrap();
        assert!(!first.is_live());
        assert_eq!(first.next(), None);
        assert_eq!(first.size_hint(), (0, Some(0)));
        // the stale read did not disturb the live chunk
        assert_eq!(second.index(), 1);
        assert_eq!(second.by_ref().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn chunk_outliving_adaptor_is_stale() {
        let mut chunks = (0..9).chunked(3).unwrap();
        let mut first = chunks.next().unwrap();
        drop(chunks);
        assert!(!first.is_live());
        assert_eq!(first.next(), None);
        assert_eq!(
            first.try_next(),
            Err(Error::StaleChunk {
                chunk: 0,
                current: None
            })
        );
    }

    #[test]
    fn try_next_reads_live_chunk() {
        let mut chunks = (0..3).chunked(2).unwrap();
        let mut first = chunks.next().unwrap();
        assert_eq!(first.try_next(), Ok(Some(0)));
        assert_eq!(first.try_next(), Ok(Some(1)));
        assert_eq!(first.try_next(), Ok(None));
    }

    #[test]
    fn fully_read_chunk_stays_empty() {
        let mut chunks = (0..4).chunked(2).unwrap();
        let mut first = chunks.next().unwrap();
        assert_eq!(first.by_ref().count(), 2);
        assert_eq!(first.next(), None);
        assert!(chunks.has_next());
        assert_eq!(first.next(), None);
    }

    #[test]
    fn debug_reports_liveness() {
        let mut chunks = (0..4).chunked(2).unwrap();
        let first = chunks.next().unwrap();
        assert_eq!(format!("{:?}", first), "Chunk { index: 0, live: true }");
        chunks.next();
        assert_eq!(format!("{:?}", first), "Chunk { index: 0, live: false }");
    }
}
