//! Shared reading position of a `Chunked` adaptor and all its chunks.
use crate::utils::chunks_needed;
use crate::ChunkSize;
use std::iter::{Fuse, Peekable};

/// State shared between the outer iterator and the chunk views.
///
/// `generation` counts chunks handed out so far: the live chunk is the one
/// created for the current generation, every older chunk is stale.
/// `taken` counts elements consumed from the source for the live chunk.
pub(crate) struct Cursor<I: Iterator> {
    source: Peekable<Fuse<I>>,
    size: ChunkSize,
    taken: usize,
    generation: usize,
}

impl<I: Iterator> Cursor<I> {
    pub(crate) fn new(source: I, size: ChunkSize) -> Self {
        #[cfg(feature = "logs")]
        {
            log::debug!("chunking source into chunks of {}", size);
        }
        Cursor {
            source: source.fuse().peekable(),
            size,
            taken: 0,
            generation: 0,
        }
    }

    pub(crate) fn size(&self) -> ChunkSize {
        self.size
    }

    pub(crate) fn generation(&self) -> usize {
        self.generation
    }

    /// Discard whatever the live chunk did not read, then close it.
    fn skip_to_next_chunk(&mut self) {
        if self.generation == 0 {
            return;
        }
        let limit = self.size.get();
        #[cfg(feature = "logs")]
        let already_taken = self.taken;
        while self.taken < limit && self.source.next().is_some() {
            self.taken += 1;
        }
        #[cfg(feature = "logs")]
        {
            if self.taken != already_taken {
                log::trace!(
                    "chunk {} closed, discarded {} unread elements",
                    self.generation - 1,
                    self.taken - already_taken
                );
            }
        }
        // an exhausted source also closes the chunk
        self.taken = limit;
    }

    /// Catch up and tell if the source can start another chunk.
    pub(crate) fn has_next(&mut self) -> bool {
        self.skip_to_next_chunk();
        self.source.peek().is_some()
    }

    /// Start a new chunk and return its generation.
    pub(crate) fn open_chunk(&mut self) -> Option<usize> {
        if !self.has_next() {
            return None;
        }
        self.taken = 0;
        self.generation += 1;
        #[cfg(feature = "logs")]
        {
            log::trace!("chunk {} opened", self.generation - 1);
        }
        Some(self.generation)
    }

    /// Read the next element on behalf of the chunk of given generation.
    /// Stale chunks get nothing and leave the counters untouched.
    pub(crate) fn pull(&mut self, generation: usize) -> Option<I::Item> {
        if generation != self.generation || self.taken >= self.size.get() {
            return None;
        }
        let item = self.source.next()?;
        self.taken += 1;
        Some(item)
    }

    /// Elements the given chunk may still yield.
    fn capacity_left(&self, generation: usize) -> usize {
        if generation == 0 || generation != self.generation {
            0
        } else {
            self.size.get() - self.taken
        }
    }

    /// Bounds on the number of elements left in the chunk of given generation.
    pub(crate) fn chunk_hint(&self, generation: usize) -> (usize, Option<usize>) {
        let capacity = self.capacity_left(generation);
        let (low, high) = self.source.size_hint();
        (
            low.min(capacity),
            Some(high.map_or(capacity, |high| high.min(capacity))),
        )
    }

    /// Bounds on the number of chunks still to come.
    pub(crate) fn chunks_hint(&self) -> (usize, Option<usize>) {
        let unread = self.capacity_left(self.generation);
        let size = self.size.get();
        let (low, high) = self.source.size_hint();
        (
            chunks_needed(low.saturating_sub(unread), size),
            high.map(|high| chunks_needed(high.saturating_sub(unread), size)),
        )
    }
}
