//! Low-level Unicode helpers for textkit.
//!
//! This crate provides the two capabilities the string transforms build on:
//! a code-point indexed view over `&str` (so that offsets never split a
//! multi-byte character) and single-code-point case classification and
//! mapping.

pub mod case;
mod code_points;

pub use code_points::*;
