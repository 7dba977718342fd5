//! Library of parser functions

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{space0, space1};
use nom::combinator::{eof, peek};
use nom::number::complete::double;
use nom::sequence::{preceded, terminated};
use nom::IResult;

// ! Boolean checks
/// Check for a segment separator, i.e. a first token of exactly `>`
///
/// GMT often writes segment headers after the marker, such as `> -Z1.0`, so
/// anything following the `>` token is ignored.
pub fn is_separator(i: &str) -> bool {
    separator(i).is_ok()
}

// ! Parser combinators

/// Parse the leading `longitude latitude` pair of a coordinate line
///
/// Any further columns are left in the remaining input and ignored by the
/// reader.
pub fn coordinate_pair(i: &str) -> IResult<&str, (f64, f64)> {
    let (i, _) = space0(i)?;
    let (i, longitude) = value(i)?;
    let (i, _) = space1(i)?;
    let (i, latitude) = value(i)?;
    Ok((i, (longitude, latitude)))
}

/// Recognise the `>` marker as a complete token
fn separator(i: &str) -> IResult<&str, &str> {
    preceded(space0, terminated(tag(">"), end_of_token))(i)
}

/// A float that makes up the whole token, so `1.0abc` is rejected
fn value(i: &str) -> IResult<&str, f64> {
    terminated(double, end_of_token)(i)
}

/// Whitespace or the end of the line must follow every token
fn end_of_token(i: &str) -> IResult<&str, &str> {
    peek(alt((space1, eof)))(i)
}
