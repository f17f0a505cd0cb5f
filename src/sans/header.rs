//! States processing the encoding header.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::TryFromBytes;

/// The single supported format version.
pub const FORMAT_VERSION: u64 = 1;

/// An error advancing over the format version.
#[derive(Debug, Error)]
pub enum VersionError {
    /// Version other than the supported one.
    #[error("Unsupported format version ({0}).")]
    Unsupported(u64),
}

/// State token to check the format version.
#[derive(Debug)]
pub struct Version;

impl Version {
    /// Transition to another state by checking a decoded format version.
    ///
    /// Returns a successor state token.
    pub fn advance(version: u64) -> Result<Fields, VersionError> {
        if version != FORMAT_VERSION {
            Err(VersionError::Unsupported(version))?;
        }

        Ok(Fields(()))
    }
}

/// An error advancing over the header fields.
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Third-dimension code without an interpretation.
    #[error("Unknown third dimension code ({0}).")]
    UnknownThirdDimension(u8),
}

/// State token to unpack the header fields.
#[derive(Debug)]
pub struct Fields(pub(super) ());

impl Fields {
    /// Transition by unpacking a decoded header bitfield.
    ///
    /// Bits beyond the three fields are ignored.
    pub fn advance(self, bits: u64) -> Result<Header, FieldsError> {
        bitfield! {
            struct RawHeader(u16) {
                [0..4] precision: u8,
                [4..7] third_dimension: u8,
                [7..11] third_dimension_precision: u8,
            }
        }

        let header = RawHeader(bits as u16);

        let code = header.third_dimension();
        let third_dimension: ThirdDimension = zerocopy::try_transmute!(code)
            .map_err(|_| FieldsError::UnknownThirdDimension(code))?;

        Ok(Header {
            precision: header.precision(),
            third_dimension,
            third_dimension_precision: header.third_dimension_precision(),
        })
    }
}

/// Parameters governing the coordinate data, unpacked from the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Decimal digits of latitude and longitude precision.
    pub precision: u8,
    /// Interpretation of the third coordinate axis.
    pub third_dimension: ThirdDimension,
    /// Decimal digits of third-dimension precision.
    pub third_dimension_precision: u8,
}

/// Interpretation of the optional third coordinate axis.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TryFromBytes)]
pub enum ThirdDimension {
    /// Coordinates carry no third axis.
    #[default]
    Absent = 0,
    /// Floor number.
    Level = 1,
    /// Height above mean sea level.
    Altitude = 2,
    /// Height of the terrain.
    Elevation = 3,
    /// Reserved for a future revision.
    Reserved1 = 4,
    /// Reserved for a future revision.
    Reserved2 = 5,
    /// Application-defined axis.
    Custom1 = 6,
    /// Application-defined axis.
    Custom2 = 7,
}
