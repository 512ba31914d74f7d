//! Report rendering.
//!
//! This module provides:
//! - `ViewOptions`: render options built once at startup
//! - `DisplayItem`: the flattened projection of an item, rebuilt per render
//! - `HtmlRenderer`: the HTML document and stylesheet renderer

pub mod html;
pub mod view;

// Re-export key types
pub use html::{HtmlRenderer, html_escape};
pub use view::{CssMode, DisplayField, DisplayItem, DisplaySection, ViewOptions};
