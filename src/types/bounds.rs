use thiserror::Error;

/// Caller-supplied `(low, high)` bounds that do not fit the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("High bound {high} is out of range for a sequence of length {len}")]
    HighOutOfRange { high: usize, len: usize },
    #[error("Low bound {low} is past the end of a sequence of length {len}")]
    LowOutOfRange { low: usize, len: usize },
}

/// A region of a sequence, validated against its length.
///
/// Callers speak in inclusive `(low, high)` pairs; `low > high` is the
/// empty region and is accepted as long as `low` does not point past the
/// end. On an empty sequence `(0, 0)` is the empty region too, since
/// `high = len - 1` has no `usize` spelling there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    low: usize,
    // exclusive
    end: usize,
}

impl Bounds {
    /// Check caller-supplied inclusive bounds against a sequence length.
    pub fn checked(low: usize, high: usize, len: usize) -> Result<Self, BoundsError> {
        if low > high {
            if low > len {
                return Err(BoundsError::LowOutOfRange { low, len });
            }
            return Ok(Self { low, end: low });
        }

        if len == 0 && high == 0 {
            return Ok(Self { low: 0, end: 0 });
        }
        if high >= len {
            return Err(BoundsError::HighOutOfRange { high, len });
        }

        Ok(Self { low, end: high + 1 })
    }

    /// The region covering a whole sequence. Empty when `len == 0`.
    pub fn full(len: usize) -> Self {
        Self { low: 0, end: len }
    }

    pub fn low(&self) -> usize {
        self.low
    }

    /// Inclusive `(low, high)` of a non-empty region, `None` when empty.
    pub fn inclusive(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            None
        } else {
            Some((self.low, self.end - 1))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.low >= self.end
    }

    /// Number of elements in the region.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.low)
    }
}
