//! Bounded, growable response buffer.

use crate::error_handling::FetchError;

/// Accumulates response bytes with stepwise growth and a hard ceiling.
///
/// After every [`advance`](Self::advance) the free space is at least one step,
/// so a read into [`spare_mut`](Self::spare_mut) never gets an empty slice.
/// Growing past the ceiling fails with `FetchError::ResponseTooLarge`, which
/// caps the largest accepted response at roughly `limit - step` bytes.
#[derive(Debug)]
pub struct ResponseBuffer {
    data: Vec<u8>,
    filled: usize,
    step: usize,
    limit: usize,
}

impl ResponseBuffer {
    pub fn new(initial: usize, step: usize, limit: usize) -> Self {
        Self {
            data: vec![0; initial],
            filled: 0,
            step,
            limit,
        }
    }

    /// The unfilled tail of the buffer.
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.filled..]
    }

    /// Marks `n` more bytes as filled and grows if less than one step is free.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ResponseTooLarge` if growing would pass the ceiling.
    pub fn advance(&mut self, n: usize) -> Result<(), FetchError> {
        debug_assert!(self.filled + n <= self.data.len());
        self.filled += n;
        if self.data.len() - self.filled < self.step {
            let grown = self.data.len() + self.step;
            if grown > self.limit {
                return Err(FetchError::ResponseTooLarge { limit: self.limit });
            }
            self.data.resize(grown, 0);
        }
        Ok(())
    }

    /// Bytes received so far.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Current allocated size, filled or not.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.data.truncate(self.filled);
        self.data
    }
}
