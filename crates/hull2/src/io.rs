//! Plain-text adapters around the hull.
//!
//! - `read_points`: a count `N` followed by `N` coordinate pairs, all
//!   whitespace-separated (the console format).
//! - `write_simple_format`: the `SimpleFormat` CSV consumed by the plotting
//!   tools, one `x,y, 0` row per hull vertex in hull order.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::geom2::Point2;

/// Failure while reading a point list.
#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    /// Input ended before the point count.
    MissingCount,
    /// The point count is not a non-negative integer.
    BadCount { token: String },
    /// A coordinate token is not a real number. `index` counts points from 0.
    BadCoordinate { index: usize, token: String },
    /// Input ended after `found` complete points.
    Truncated { expected: usize, found: usize },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "reading points: {err}"),
            ReadError::MissingCount => write!(f, "expected a point count, found end of input"),
            ReadError::BadCount { token } => {
                write!(f, "point count {token:?} is not a non-negative integer")
            }
            ReadError::BadCoordinate { index, token } => {
                write!(f, "point {index}: coordinate {token:?} is not a number")
            }
            ReadError::Truncated { expected, found } => write!(
                f,
                "expected {expected} points, input ended after {found}"
            ),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

/// Read `N` then `N` pairs `x y`. Tokens may be split across lines freely;
/// anything after the last pair is left unread.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point2>, ReadError> {
    let mut tokens = Tokens::new(reader);
    let count_tok = tokens.next_token()?.ok_or(ReadError::MissingCount)?;
    let n: usize = count_tok
        .parse()
        .map_err(|_| ReadError::BadCount { token: count_tok })?;
    // Cap the reservation; the count is untrusted.
    let mut out = Vec::with_capacity(n.min(1 << 16));
    for index in 0..n {
        let mut coord = || -> Result<f64, ReadError> {
            let tok = tokens.next_token()?.ok_or(ReadError::Truncated {
                expected: n,
                found: index,
            })?;
            tok.parse::<f64>()
                .map_err(|_| ReadError::BadCoordinate { index, token: tok })
        };
        let x = coord()?;
        let y = coord()?;
        out.push(Point2::new(x, y));
    }
    Ok(out)
}

/// Line-buffered whitespace tokenizer.
struct Tokens<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(tok) = self.pending.pop() {
                return Ok(Some(tok));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            // Reversed so `pop` yields tokens in reading order.
            self.pending = line.split_whitespace().rev().map(str::to_owned).collect();
        }
    }
}

/// Header lines of the SimpleFormat CSV.
pub const SIMPLE_FORMAT_HEADER: &str = "SimpleFormat\nx,y\n";

/// Write `hull` as SimpleFormat CSV. Coordinates use Rust's shortest
/// round-trip formatting; the trailing `0` is a fixed z placeholder.
pub fn write_simple_format<W: Write>(mut writer: W, hull: &[Point2]) -> io::Result<()> {
    writer.write_all(SIMPLE_FORMAT_HEADER.as_bytes())?;
    for p in hull {
        writeln!(writer, "{},{}, 0", p.x, p.y)?;
    }
    writer.flush()
}
