//! Whitespace tokenizer over a buffered reader.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::errors::TextProviderError;

/// Pulls integer tokens from `reader` one line at a time, remembering the
/// line each token came from.
pub(crate) struct Tokens<R> {
    reader: R,
    line: usize,
    pending: VecDeque<String>,
    buffer: String,
}

impl<R: BufRead> Tokens<R> {
    pub(crate) const fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: VecDeque::new(),
            buffer: String::new(),
        }
    }

    /// Reads a mandatory header integer.
    pub(crate) fn header(&mut self, field: &'static str) -> Result<usize, TextProviderError> {
        self.integer()?
            .ok_or(TextProviderError::MissingHeader { field })
    }

    /// Reads the pair numbered `pair`, or `None` at a clean end of input.
    pub(crate) fn pair(&mut self, pair: usize) -> Result<Option<(usize, usize)>, TextProviderError> {
        let Some(first) = self.integer()? else {
            return Ok(None);
        };
        let second = self
            .integer()?
            .ok_or(TextProviderError::TruncatedPair { pair })?;
        Ok(Some((first, second)))
    }

    fn integer(&mut self) -> Result<Option<usize>, TextProviderError> {
        let Some(token) = self.token()? else {
            return Ok(None);
        };
        match token.parse::<usize>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(TextProviderError::InvalidInteger {
                line: self.line,
                token,
            }),
        }
    }

    fn token(&mut self) -> Result<Option<String>, TextProviderError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending
                .extend(self.buffer.split_whitespace().map(str::to_owned));
        }
    }
}
