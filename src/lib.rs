//! Image carousel with wrap-around navigation and autoplay.
//!
//! [`carousel::Carousel`] is the controller. It works against any
//! [`document::Document`]; [`document::MemoryDocument`] is the in-process
//! page model used by the raylib [`viewer`] and by tests.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod document;
pub mod slide;
pub mod state;
pub mod texture_loader;
pub mod timer;
pub mod viewer;

pub use carousel::Carousel;
pub use document::{Document, MemoryDocument, NodeId};
