//! Line-by-line reading of GMT multi-segment text

// crate modules
use crate::error::{Error, Result};
use crate::parsers;
use crate::polylines::Polylines;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// external crates
use log::debug;

/// Parse boundary text that is already in memory
///
/// Each item is one line of text. A line with `>` as its first token ends the
/// current segment, every other line must start with a `longitude latitude`
/// pair.
///
/// The final segment is always kept, even if empty, so the result has one more
/// segment than there are `>` lines. No input at all gives a single empty
/// segment.
///
/// ```rust
/// # use ashtools_boundary::parse_boundary;
/// let text = "1.0 2.0\n1.5 2.5\n> \n3.0 4.0\n";
/// let polylines = parse_boundary(text.lines()).unwrap();
///
/// assert_eq!(polylines.latitudes(), &[vec![2.0, 2.5], vec![4.0]]);
/// assert_eq!(polylines.longitudes(), &[vec![1.0, 1.5], vec![3.0]]);
///
/// // blank or partial lines are never skipped silently
/// assert!(parse_boundary(["1.0 2.0", "", "3.0 4.0"]).is_err());
/// ```
pub fn parse_boundary<I, S>(lines: I) -> Result<Polylines>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = SegmentBuilder::new();
    for (index, line) in lines.into_iter().enumerate() {
        builder.push_line(index + 1, line.as_ref())?;
    }
    Ok(builder.finish())
}

/// Parse boundary text from any buffered stream
///
/// Only a single line is held in memory at a time, so this is the preferred
/// way to read the often very large full resolution shoreline dumps.
pub fn read_boundary<R: BufRead>(reader: R) -> Result<Polylines> {
    let mut builder = SegmentBuilder::new();
    for (index, line) in reader.lines().enumerate() {
        builder.push_line(index + 1, &line?)?;
    }
    Ok(builder.finish())
}

/// Read a boundary file extracted by GMT
///
/// - `path` - Path to the text file, can be [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use ashtools_boundary::read_boundary_file;
/// let polylines = read_boundary_file("path/to/coast.xy").unwrap();
/// println!("{polylines}");
/// ```
pub fn read_boundary_file<P: AsRef<Path>>(path: P) -> Result<Polylines> {
    let reader = init_reader(path)?;
    read_boundary(reader)
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Accumulates the coordinates of the segment currently being read
#[derive(Debug)]
struct SegmentBuilder {
    polylines: Polylines,
    longitudes: Vec<f64>,
    latitudes: Vec<f64>,
}

impl SegmentBuilder {
    fn new() -> Self {
        Self {
            polylines: Polylines::empty(),
            longitudes: Vec::new(),
            latitudes: Vec::new(),
        }
    }

    fn push_line(&mut self, number: usize, line: &str) -> Result<()> {
        // tolerate CRLF line endings
        let line = line.trim_end();

        if parsers::is_separator(line) {
            self.flush();
            return Ok(());
        }

        let (_, (longitude, latitude)) =
            parsers::coordinate_pair(line).map_err(|_| Error::MalformedInput {
                line: number,
                content: line.to_string(),
            })?;

        self.longitudes.push(longitude);
        self.latitudes.push(latitude);
        Ok(())
    }

    fn flush(&mut self) {
        let longitudes = std::mem::take(&mut self.longitudes);
        let latitudes = std::mem::take(&mut self.latitudes);
        self.polylines.push_segment(longitudes, latitudes);
    }

    fn finish(mut self) -> Polylines {
        self.flush();
        debug!(
            "Parsed {} boundary segments ({} points)",
            self.polylines.number_of_segments(),
            self.polylines.number_of_points()
        );
        self.polylines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_one_empty_segment() {
        let polylines = parse_boundary(Vec::<String>::new()).unwrap();
        assert_eq!(polylines.latitudes(), &[Vec::<f64>::new()]);
        assert_eq!(polylines.longitudes(), &[Vec::<f64>::new()]);
    }

    #[test]
    fn separators_at_the_edges() {
        let polylines = parse_boundary([">", "1.0 2.0", ">"]).unwrap();
        assert_eq!(polylines.number_of_segments(), 3);
        assert_eq!(polylines.longitudes(), &[vec![], vec![1.0], vec![]]);
    }

    #[test]
    fn malformed_line_number() {
        let result = parse_boundary(["1.0 2.0", ">", "3.0"]);
        match result {
            Err(Error::MalformedInput { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "3.0");
            }
            _ => panic!("expected a malformed input error"),
        }
    }

    #[test]
    fn crlf_endings() {
        let text = "1.0 2.0\r\n>\r\n3.0 4.0\r\n";
        let polylines = read_boundary(text.as_bytes()).unwrap();
        assert_eq!(polylines.latitudes(), &[vec![2.0], vec![4.0]]);
    }
}
