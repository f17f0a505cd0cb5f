#![no_std]

//! An efficient decoder for flexible-polyline encoded coordinate sequences.
//!
//! Meander unpacks the compact, URL-safe text encoding of a polyline into
//! its coordinate triples: a short header declaring the coordinate
//! precision and the interpretation of an optional third axis, followed by
//! delta-compressed coordinate data. Malformed input fails the whole
//! decode; no partial sequence is ever produced.
//!
//! Most users should begin with the functions in the [`avec`] module.
//! These are suited to decoding complete encodings held in memory. If
//! these prove insufficient, consider implementing a decoder as described
//! in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable the allocating decoder (default).

pub mod avec;
pub mod sans;
