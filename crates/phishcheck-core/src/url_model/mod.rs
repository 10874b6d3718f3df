//! URL modeling: normalization and lenient lexical splitting.
//!
//! Everything here is total over `&str`: malformed input degrades to empty
//! components instead of an error, so feature extraction can run on any text
//! a user submits.

mod normalize;
mod split;

pub use normalize::normalize;
pub use split::{split_url, UrlParts};
