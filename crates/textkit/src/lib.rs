//! Stateless string transforms.
//!
//! - [`abbreviate`] cuts a string at a word boundary and appends a marker.
//! - [`initials`] collects the first letter of every delimited word.
//! - [`swap_case`] inverts letter case, titlecasing word starts.
//! - [`wrap`] inserts line breaks at the matches of a regular expression.
//!
//! All lengths and positions are counted in Unicode code points. Functions
//! take `&str`; an absent input is handled with `Option::map` by the caller.

mod abbreviate;
pub mod config;
mod error;
mod initials;
pub mod primitives;
mod swap_case;
pub mod wrap;

pub use abbreviate::abbreviate;
pub use error::*;
pub use initials::initials;
pub use swap_case::swap_case;
pub use wrap::{LINE_SEPARATOR, WrapOptions, Wrapper, wrap};
