//! Shared types for phynetics.
//!
//! - [`character`] -- Character classification and case folding
//! - [`enums`] -- Token kinds, grapheme classes, voicing
//! - [`token`] -- Tokenizer output
//! - [`grapheme`] -- Normalized orthographic units with static features
//! - [`phoneme`] -- Rule engine output units

pub mod character;
pub mod enums;
pub mod grapheme;
pub mod phoneme;
pub mod token;
