//! Reusable modal dialog widget
//!
//! Construction creates two owned rectangles (backdrop and content box),
//! resolves layout against the viewport, and optionally auto-shows. The
//! registry tracks every live instance and dispatches Escape, clicks and
//! auto-close ticks.

mod registry;
mod types;
mod widget;

pub use registry::DialogRegistry;
pub use types::{DialogHook, DialogHooks, DialogId, DialogLayout, DialogOptions, Extent};
pub use widget::Dialog;
