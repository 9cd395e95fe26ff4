//! PPTX (Office Open XML) backend for the Context Forge slide deck.
//!
//! Writes presentations as ZIP archives of PresentationML parts and reads
//! them back into a structural outline for verification.

pub mod package;
pub mod reader;
pub mod slide;
pub mod template;
pub mod writer;

pub use reader::PptxReader;
pub use writer::PptxWriter;
