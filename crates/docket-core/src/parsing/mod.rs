//! Text parsing: line normalization for cleaned page output, and
//! marker-bounded region extraction plus line-item field parsing for
//! quote documents.
//!
//! Everything here is pure string work. Lines come in from the
//! extraction layer, records go out as [`crate::model`] types, and no
//! function in this module touches a PDF.

pub mod group;
pub mod items;
pub mod normalize;
pub mod region;
pub mod values;

pub use items::parse_items;
pub use normalize::normalize;
pub use region::extract_region;
