#![cfg(feature = "std")]

use meander::avec::{self, text::Error};
use meander::sans::axis::{self, Axis};
use meander::sans::header::{Version, VersionError};
use meander::sans::value::ValueError;

#[test]
fn blank_input() {
    assert!(matches!(avec::decode("").unwrap_err(), Error::BlankInput));
    assert!(matches!(
        avec::decode(" \t\n").unwrap_err(),
        Error::BlankInput
    ));
    assert!(matches!(
        avec::third_dimension("").unwrap_err(),
        Error::BlankInput
    ));
}

#[test]
fn unsupported_version() {
    // `C` decodes to version two.
    assert!(matches!(
        avec::decode("CFUU").unwrap_err(),
        Error::Version(VersionError::Unsupported(2))
    ));
    assert!(matches!(
        avec::third_dimension("CFUU").unwrap_err(),
        Error::Version(VersionError::Unsupported(2))
    ));
}

#[test]
fn invalid_character() {
    // Outside the span covered by the decoding table.
    assert!(matches!(
        avec::decode("BFU~U").unwrap_err(),
        Error::Value(ValueError::InvalidCharacter('~'))
    ));

    // Inside the span, but in one of the alphabet gaps.
    assert!(matches!(
        avec::decode("BF?UU").unwrap_err(),
        Error::Value(ValueError::InvalidCharacter('?'))
    ));

    // Whitespace is only ignored at the edges of the input.
    assert!(matches!(
        avec::decode("BF UU").unwrap_err(),
        Error::Value(ValueError::InvalidCharacter(' '))
    ));
}

#[test]
fn truncated_header() {
    assert!(matches!(avec::decode("B").unwrap_err(), Error::EndOfText));
    assert!(matches!(
        avec::third_dimension("B").unwrap_err(),
        Error::EndOfText
    ));
}

#[test]
fn truncated_value() {
    // `g` carries a continuation flag with no character following it.
    assert!(matches!(avec::decode("BFg").unwrap_err(), Error::EndOfText));
}

#[test]
fn truncated_group() {
    // The second group ends after its latitude.
    assert!(matches!(avec::decode("BFUUU").unwrap_err(), Error::EndOfText));
}

#[test]
fn overlong_value() {
    // Fourteen continuation characters shift past the accumulator width.
    let text = format!("B{}A", "g".repeat(14));

    assert!(matches!(
        avec::decode(&text).unwrap_err(),
        Error::Value(ValueError::Overflow)
    ));
}

#[test]
fn no_positions_after_failure() {
    let mut positions = avec::positions("BFUUU").unwrap();

    assert!(positions.next().unwrap().is_ok());
    assert!(positions.next().unwrap().is_err());

    // The iterator is exhausted once a group has failed.
    assert!(positions.next().is_none());
}

#[test]
fn header_fields_round_trip() {
    for precision in 0..16u64 {
        for code in 0..8u64 {
            for third_precision in 0..16u64 {
                let bits = precision | code << 4 | third_precision << 7;
                let header = Version::advance(1).unwrap().advance(bits).unwrap();

                assert_eq!(u64::from(header.precision), precision);
                assert_eq!(header.third_dimension as u64, code);
                assert_eq!(
                    u64::from(header.third_dimension_precision),
                    third_precision
                );
            }
        }
    }
}

#[test]
fn signed_delta_round_trip() {
    let deltas = [
        0i64,
        1,
        -1,
        5,
        -25,
        150,
        8_675_309,
        -8_675_309,
        35_999_926,
        -35_999_926,
        i64::MAX >> 1,
        i64::MIN >> 1,
    ];

    for delta in deltas {
        let raw = ((delta << 1) ^ (delta >> 63)) as u64;

        assert_eq!(axis::signed_delta(raw), delta);
    }
}

#[test]
fn axis_accumulates_deltas() {
    let mut axis = Axis::new(2);

    // Deltas of +150 and -25, in their interleaved raw form.
    assert_eq!(axis.advance(300), 1.5);
    assert_eq!(axis.advance(49), 1.25);
}
