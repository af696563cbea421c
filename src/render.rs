// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render module
//!
//! - `adapter`: display sink interface (crossterm)
//! - `cell`: basic drawing unit, one character
//! - `buffer`: vector of cells, the frame grid
//! - `style`: 16-color palette and packed attribute

pub mod adapter;
pub mod buffer;
pub mod cell;
pub mod style;

pub use adapter::Adapter;
pub use buffer::Buffer;
pub use cell::Cell;
pub use style::{Attr, Color};
