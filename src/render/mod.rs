//! Turning a [`Page`](crate::view::Page) into something printable.

pub mod json;
pub mod text;

pub use text::{TextOptions, render_page};
