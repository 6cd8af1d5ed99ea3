use std::iter::FusedIterator;

use crate::error::{Result, SplitError};

/// Whether zero-length tokens survive the split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SplitMode {
    #[default]
    Keep,
    RemoveEmpty,
}

/// A lazy split of `source` on a single `delimiter` character.
///
/// The splitter holds no progress of its own: every call to [`Splitter::iter`]
/// starts a fresh pass over the source, so the same value can be scanned any
/// number of times, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splitter<'a> {
    source: &'a str,
    delimiter: char,
    mode: SplitMode,
}

impl<'a> Splitter<'a> {
    pub fn new(source: &'a str, delimiter: char, mode: SplitMode) -> Self {
        Splitter {
            source,
            delimiter,
            mode,
        }
    }

    /// Builds a splitter from a source that may be missing.
    ///
    /// Fails with [`SplitError::InvalidArgument`] when `source` is `None`.
    pub fn try_new(source: Option<&'a str>, delimiter: char, mode: SplitMode) -> Result<Self> {
        let source = source.ok_or(SplitError::InvalidArgument("source"))?;
        Ok(Self::new(source, delimiter, mode))
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    pub fn iter(&self) -> Tokens<'a> {
        Tokens {
            source: self.source,
            delimiter: self.delimiter,
            mode: self.mode,
            position: 0,
            finished: false,
        }
    }

    /// Type-erased view of [`Splitter::iter`], for call sites that take any
    /// `dyn Iterator` of tokens. Yields exactly what `iter` yields.
    pub fn boxed(&self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(self.iter())
    }
}

impl<'a> IntoIterator for Splitter<'a> {
    type Item = &'a str;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 's> IntoIterator for &'s Splitter<'a> {
    type Item = &'a str;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Single-pass cursor over the tokens of a [`Splitter`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    delimiter: char,
    mode: SplitMode,
    position: usize,
    finished: bool,
}

impl<'a> Tokens<'a> {
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The part of the source not yet scanned, or `None` once exhausted.
    pub fn remainder(&self) -> Option<&'a str> {
        if self.finished {
            None
        } else {
            Some(&self.source[self.position..])
        }
    }

    // One segment of the source, empty or not.
    fn advance(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }

        let rest = &self.source[self.position..];
        match rest.find(self.delimiter) {
            Some(offset) => {
                // Landing exactly on source.len() is fine: a trailing
                // delimiter still owes one empty segment.
                let (segment, _) = rest.split_at(offset);
                self.position += offset + self.delimiter.len_utf8();
                Some(segment)
            }
            None => {
                self.finished = true;
                Some(rest)
            }
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let segment = self.advance()?;
            if self.mode == SplitMode::Keep || !segment.is_empty() {
                return Some(segment);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }

        let remaining = self.source.len() - self.position;
        match self.mode {
            SplitMode::Keep => (1, Some(remaining + 1)),
            // Non-empty tokens need a byte each plus a delimiter between them.
            SplitMode::RemoveEmpty => (0, Some((remaining + 1) / 2)),
        }
    }
}

impl FusedIterator for Tokens<'_> {}
