//! Text-based decoder implementation.

use core::str::Chars;

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    Decoder,
    axis::Axis,
    header::{FieldsError, Header, ThirdDimension, VersionError},
    value::{Value, ValueError},
};

use super::Position;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
use std::vec::Vec;

/// Errors occurring while decoding from text.
#[derive(Debug, Error)]
pub enum Error {
    /// Input held no encoded data.
    #[error("Input is empty or blank.")]
    BlankInput,
    /// Unexpectedly reached the end of the text.
    #[error("Unexpectedly reached the end of the text.")]
    EndOfText,
    /// Incorrect format version.
    #[error("Incorrect format version: {0}.")]
    Version(#[from] VersionError),
    /// Incorrect header fields.
    #[error("Incorrect header: {0}.")]
    Header(#[from] FieldsError),
    /// Malformed value in the stream.
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Decode all positions from an encoded polyline.
///
/// Surrounding whitespace is ignored. The whole input is decoded: any
/// malformed character or truncated value fails the entire call, and no
/// partial sequence is returned.
///
/// This method is also re-exported as `meander::avec::decode`.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
pub fn decode(text: &str) -> Result<Vec<Position>, Error> {
    positions(text)?.collect()
}

/// Decode positions from an encoded polyline, lazily.
///
/// The header is parsed up front; coordinate groups are decoded one at a
/// time as the returned iterator is driven.
///
/// This method is also re-exported as `meander::avec::positions`.
pub fn positions(text: &str) -> Result<Positions<'_>, Error> {
    let text = text.trim();

    if text.is_empty() {
        Err(Error::BlankInput)?;
    }

    let mut chars = text.chars();
    let header = parse_header(&mut chars)?;

    Ok(Positions::new(chars, header))
}

/// Read the third-dimension interpretation declared by an encoded
/// polyline.
///
/// Only the header is examined; coordinate data beyond it is neither
/// decoded nor validated.
///
/// This method is also re-exported as `meander::avec::third_dimension`.
pub fn third_dimension(text: &str) -> Result<ThirdDimension, Error> {
    let text = text.trim();

    if text.is_empty() {
        Err(Error::BlankInput)?;
    }

    let header = parse_header(&mut text.chars())?;

    Ok(header.third_dimension)
}

/// Iterator over the coordinate data of an encoded polyline.
///
/// Returned by [`positions`]. Yields one [`Position`] per decoded group.
/// The first error is yielded once, after which the iterator is
/// exhausted; decoding cannot resume past a malformed group.
#[derive(Debug)]
pub struct Positions<'a> {
    chars: Chars<'a>,
    latitude: Axis,
    longitude: Axis,
    third_dimension: Option<Axis>,
    failed: bool,
}

impl<'a> Positions<'a> {
    fn new(chars: Chars<'a>, header: Header) -> Self {
        let third_dimension = (header.third_dimension != ThirdDimension::Absent)
            .then(|| Axis::new(header.third_dimension_precision));

        Self {
            chars,
            latitude: Axis::new(header.precision),
            longitude: Axis::new(header.precision),
            third_dimension,
            failed: false,
        }
    }

    fn fail(&mut self, err: Error) -> Error {
        self.failed = true;
        err
    }
}

impl Iterator for Positions<'_> {
    type Item = Result<Position, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        // A group boundary is the one place the text may cleanly end.
        let latitude = match read_value(&mut self.chars) {
            Ok(Some(raw)) => self.latitude.advance(raw),
            Ok(None) => return None,
            Err(err) => return Some(Err(self.fail(err))),
        };

        let longitude = match read_delta(&mut self.chars, &mut self.longitude) {
            Ok(value) => value,
            Err(err) => return Some(Err(self.fail(err))),
        };

        let third_dimension = match &mut self.third_dimension {
            Some(axis) => match read_delta(&mut self.chars, axis) {
                Ok(value) => value,
                Err(err) => return Some(Err(self.fail(err))),
            },
            None => 0.0,
        };

        Some(Ok(Position {
            latitude,
            longitude,
            third_dimension,
        }))
    }
}

/// Advance over the two header values at the start of the text.
fn parse_header(chars: &mut Chars<'_>) -> Result<Header, Error> {
    let version = read_value(chars)?.ok_or(Error::EndOfText)?;
    let fields = Decoder::advance(version)?;

    let bits = read_value(chars)?.ok_or(Error::EndOfText)?;

    Ok(fields.advance(bits)?)
}

/// Read one value and advance an axis over it, treating exhausted input
/// as truncation.
fn read_delta(chars: &mut Chars<'_>, axis: &mut Axis) -> Result<f64, Error> {
    let raw = read_value(chars)?.ok_or(Error::EndOfText)?;

    Ok(axis.advance(raw))
}

/// Read one complete value from the text, if any remains.
///
/// Returns `None` when the text was already exhausted; ending mid-value
/// is an error.
fn read_value(chars: &mut Chars<'_>) -> Result<Option<u64>, Error> {
    let Some(first) = chars.next() else {
        return Ok(None);
    };

    let mut state = match Value::new().advance(first)? {
        Right(value) => return Ok(Some(value)),
        Left(state) => state,
    };

    loop {
        let c = chars.next().ok_or(Error::EndOfText)?;

        state = match state.advance(c)? {
            Right(value) => return Ok(Some(value)),
            Left(state) => state,
        };
    }
}
