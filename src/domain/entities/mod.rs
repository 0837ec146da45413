//! Core domain entities.
//!
//! - [`Link`] - The destination a short code redirects to
//! - [`ShortCode`] - The fixed-length key a link is stored under
//!
//! Both are validated newtypes: holding one guarantees it is non-empty, so the
//! code generator and the store never see an empty value.

pub mod link;
pub mod short_code;

pub use link::Link;
pub use short_code::ShortCode;
