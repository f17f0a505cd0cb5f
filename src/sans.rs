//! Low-level building blocks for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, such as those decoding without an allocator. See
//! [`crate::avec`] for implementations covering common decoding patterns.
//!
//! # Architecture
//!
//! An encoding is a stream of characters, each carrying six bits: five
//! bits of payload and a continuation flag. Characters are folded into
//! unsigned values by the [`value::Value`] state token, one character per
//! call to its `advance` method. A completed value is then handed to the
//! next stage: the [`header::Version`] and [`header::Fields`] states while
//! the header is being parsed, or an [`axis::Axis`] accumulator once
//! coordinate data begins.
//!
//! Some areas of the decoding process are not represented in the state
//! tokens and must be carefully written:
//!
//! - Reading characters from the correct place in the input.
//!
//! - Ending decoding once the input is exhausted, and rejecting input that
//!   ends while a continuation flag is still pending.
//!
//! - Driving the latitude, longitude, and third-dimension accumulators in
//!   their fixed order, one value per axis per coordinate.
//!
//! Implementers are recommended to begin by studying and modifying the
//! decoder in the [`crate::avec`] module.

pub mod alphabet;
pub mod axis;
pub mod header;
pub mod value;

/// Entrypoint to the decoding states.
pub type Decoder = header::Version;
