//! Nesting depth of the trace output.

use crate::stream::Stream;

/// Run of spaces written in chunks; depth is not bounded by its length.
const SPACES: &[u8] = b"                                                                ";

/// Open nesting levels, and the spaces they prefix to each trace line.
///
/// Levels are counted on their own so that a zero `unit` still catches an
/// unmatched close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indentation {
    levels: usize,
    unit: usize,
}

impl Indentation {
    pub fn new(unit: usize) -> Self {
        Self { levels: 0, unit }
    }

    /// Current width in spaces.
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels * self.unit
    }

    #[inline]
    pub fn levels(&self) -> usize {
        self.levels
    }

    #[inline]
    pub fn unit(&self) -> usize {
        self.unit
    }

    #[inline]
    pub fn indent(&mut self) {
        self.levels += 1;
    }

    /// Close one nesting level.
    ///
    /// # Panics
    ///
    /// If no level is open. That means an End event arrived without its
    /// Begin, which the reader must never do.
    #[inline]
    pub fn dedent(&mut self) {
        self.levels = self
            .levels
            .checked_sub(1)
            .unwrap_or_else(|| panic!("dedent below zero (unit {})", self.unit));
    }

    /// Write `depth` spaces to `stream`.
    pub fn write_to<S: Stream + ?Sized>(&self, stream: &mut S) {
        let mut remaining = self.depth();
        while remaining > SPACES.len() {
            stream.write_data(SPACES);
            remaining -= SPACES.len();
        }
        if remaining > 0 {
            stream.write_data(&SPACES[..remaining]);
        }
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::new(2)
    }
}
