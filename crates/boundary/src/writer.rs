//! Write operations for boundary polylines

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::polylines::Polylines;

/// Write [Polylines] back to GMT multi-segment text
///
/// One `longitude latitude` pair per line with a `>` line between segments.
/// Reading the output again gives back exactly the same segments, including
/// any empty ones. Every [Polylines] comes from a parse and so holds at least
/// one segment, which is what an empty file reads back as.
///
/// ```no_run
/// # use ashtools_boundary::{read_boundary_file, write_boundary};
/// let polylines = read_boundary_file("./coast.xy").unwrap();
/// write_boundary(&polylines, "./coast_copy.xy").unwrap();
/// ```
pub fn write_boundary<P: AsRef<Path>>(polylines: &Polylines, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;
    write_gmt(polylines, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write [Polylines] as GMT multi-segment text to any writer
///
/// ```rust
/// # use ashtools_boundary::{parse_boundary, write_gmt};
/// let polylines = parse_boundary(["1 2", "1.5 2.5", ">", "3 4"]).unwrap();
///
/// let mut buffer = Vec::new();
/// write_gmt(&polylines, &mut buffer).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "1 2\n1.5 2.5\n>\n3 4\n");
/// ```
pub fn write_gmt<W: Write>(polylines: &Polylines, writer: &mut W) -> Result<()> {
    for (i, (longitudes, latitudes)) in polylines.segments().enumerate() {
        if i > 0 {
            writeln!(writer, ">")?;
        }
        for (lon, lat) in longitudes.iter().zip(latitudes.iter()) {
            writeln!(writer, "{lon} {lat}")?;
        }
    }
    Ok(())
}

/// Write [Polylines] to a JSON file
///
/// The layout is a dictionary of `latitude` and `longitude` lists of
/// segments.
///
/// ```no_run
/// # use ashtools_boundary::{read_boundary_file, write_json};
/// let polylines = read_boundary_file("./coast.xy").unwrap();
/// write_json(&polylines, "./coast.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(polylines: &Polylines, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, polylines)?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
