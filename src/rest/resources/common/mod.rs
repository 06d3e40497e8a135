//! Types shared by several resources.

mod address;
mod line_item;
mod link;

pub use address::Address;
pub use line_item::LineItem;
pub use link::Link;

pub(crate) use line_item::validate_lines;
