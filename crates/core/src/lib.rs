//! Core domain types, units and drawing primitives for building the
//! MCP Context Forge presentation.

pub mod color;
pub mod compose;
pub mod error;
pub mod outline;
pub mod types;
pub mod units;

pub use color::{palette, Rgb};
pub use error::{Error, Result};
pub use outline::{DeckOutline, ShapeOutline, SlideOutline};
pub use types::{
    Alignment, Anchor, Font, Frame, Line, Paragraph, Presentation, Shape, ShapeKind, Slide, TextFrame,
};
pub use units::{inches, pt, Emu, Points};
