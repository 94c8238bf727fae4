pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::{pad_center, pad_left, pad_right};
