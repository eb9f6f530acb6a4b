//! Reusable UI components (header, footer, inputs, toasts, etc.).

pub mod footer;
pub mod header;
pub mod input;
pub mod popover;
pub mod scrollbar;
pub mod scrollview;
pub mod toast;
