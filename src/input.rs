//! Line-oriented puzzle input
//!
//! Puzzle inputs hold one record per line. [`Records`] reads them lazily,
//! trims each line, skips blank ones and parses the rest, tagging failures
//! with their 1-based line number.
//!
//! # Examples
//!
//! ```
//! use aoc2021::core::models::Measurement;
//! use aoc2021::input;
//!
//! let values: Vec<Measurement> = input::parse_lines::<Measurement, _, _>(["1", "", "2"])
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(values.len(), 2);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;

use crate::core::{ParseError, SolveError};

/// Lazily parsed records from a line source
pub struct Records<L, T> {
    lines: L,
    line: usize,
    _record: PhantomData<fn() -> T>,
}

impl<L, T> fmt::Debug for Records<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Records").field("line", &self.line).finish_non_exhaustive()
    }
}

impl<L, T> Records<L, T> {
    /// Wrap a source of lines
    pub const fn new(lines: L) -> Self {
        Self {
            lines,
            line: 0,
            _record: PhantomData,
        }
    }

    /// Number of lines consumed so far
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}

impl<L, S, T> Iterator for Records<L, T>
where
    L: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
    T: FromStr<Err = ParseError>,
{
    type Item = Result<T, SolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(err) => return Some(Err(err.into())),
            };
            self.line += 1;

            let record = raw.as_ref().trim();
            if record.is_empty() {
                continue;
            }

            return Some(record.parse().map_err(|err| SolveError::malformed(self.line, err)));
        }
    }
}

/// Parse records from any buffered reader
pub fn records<T, R>(reader: R) -> Records<io::Lines<R>, T>
where
    R: BufRead,
{
    Records::new(reader.lines())
}

/// Parse records from lines already in memory
pub fn parse_lines<T, I, S>(lines: I) -> impl Iterator<Item = Result<T, SolveError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    T: FromStr<Err = ParseError>,
{
    Records::new(lines.into_iter().map(Ok::<S, io::Error>))
}

/// Open a file and parse its records lazily
pub fn read_records<T>(path: &Path) -> io::Result<Records<io::Lines<BufReader<File>>, T>> {
    let file = File::open(path)?;
    log::debug!("reading records from {}", path.display());
    Ok(records(BufReader::new(file)))
}
