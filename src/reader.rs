//! Reading sentences from a line oriented source such as a serial port.

use std::io;

use tracing::{trace, warn};

use crate::checksum::{verify_checksum, ChecksumMode};
use crate::err::ParseError;
use crate::sentence::{parse_sentence, Sentence};

/// Configuration of a [`SentenceReader`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Whether checksums are verified before parsing. Defaults to
    /// [`ChecksumMode::Ignore`].
    pub checksum: ChecksumMode,
    /// Log and skip sentences that fail to parse instead of yielding the
    /// error. I/O errors are always yielded.
    pub skip_malformed: bool,
}

/// Iterator over the sentences of `input`, one per line.
///
/// Blank lines are skipped. Every other line is handed to
/// [`parse_sentence`]; a malformed line is a failure of that line only and
/// the next call continues with the following line.
#[derive(Debug)]
pub struct SentenceReader<R> {
    lines: io::Lines<R>,
    config: ReaderConfig,
}

impl<R: io::BufRead> SentenceReader<R> {
    /// Create a new reader with the default configuration.
    pub fn new(input: R) -> Self {
        Self::with_config(input, ReaderConfig::default())
    }

    pub fn with_config(input: R, config: ReaderConfig) -> Self {
        SentenceReader {
            lines: input.lines(),
            config,
        }
    }

    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.config.checksum = mode;
        self
    }

    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.config.skip_malformed = skip;
        self
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    fn parse_line(&self, line: &str) -> Result<Sentence, ParseError> {
        if self.config.checksum == ChecksumMode::Verify {
            verify_checksum(line)?;
        }
        parse_sentence(line)
    }
}

impl<R: io::BufRead> Iterator for SentenceReader<R> {
    type Item = Result<Sentence, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if line.trim().is_empty() {
                trace!("skipping blank line");
                continue;
            }

            match self.parse_line(&line) {
                Ok(sentence) => {
                    trace!(line = %line, "parsed sentence");
                    return Some(Ok(sentence));
                }
                Err(e) if self.config.skip_malformed => {
                    warn!(line = %line, error = %e, "skipping malformed sentence");
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
