//! State token accumulating variable-length values.

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::alphabet;

/// Payload bits carried by one character.
const PAYLOAD: u8 = 0x1F;

/// Flag bit marking that further characters follow.
const CONTINUATION: u8 = 0x20;

/// An error advancing over an encoded value.
#[derive(Debug, Error)]
pub enum ValueError {
    /// Character outside the encoding alphabet.
    #[error("Character {0:?} is not in the encoding alphabet.")]
    InvalidCharacter(char),
    /// Too many continuation characters for the value width.
    #[error("Value does not fit in 64 bits.")]
    Overflow,
}

/// State token to accumulate one unsigned value.
#[derive(Debug, Default)]
pub struct Value {
    accumulated: u64,
    shift: u32,
}

impl Value {
    /// Construct a token with an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition by folding in one character.
    ///
    /// Characters contribute five payload bits each, least-significant
    /// group first. Returns the completed value once a character without
    /// the continuation flag is reached, or the token back when more
    /// characters are expected.
    pub fn advance(self, c: char) -> Result<Either<Self, u64>, ValueError> {
        let bits = alphabet::decode(c).ok_or(ValueError::InvalidCharacter(c))?;

        if self.shift >= u64::BITS {
            Err(ValueError::Overflow)?;
        }

        let accumulated = self.accumulated | u64::from(bits & PAYLOAD) << self.shift;

        Ok(if bits & CONTINUATION != 0 {
            Left(Self {
                accumulated,
                shift: self.shift + 5,
            })
        } else {
            Right(accumulated)
        })
    }
}
