//! Rendering module
//!
//! The composer turns world state into primitive draw calls on any `Canvas`.
//! `Framebuffer` is a software canvas for hosts without a display driver.

pub mod canvas;
pub mod compose;
pub mod framebuffer;
pub mod shapes;

pub use canvas::{Canvas, DrawCall, DrawList};
pub use compose::Renderer;
pub use framebuffer::Framebuffer;
