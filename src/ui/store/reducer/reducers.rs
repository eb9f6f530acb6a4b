//! Domain-specific reducer functions.

pub mod contact;
pub mod counter;
pub mod notice;
pub mod page;
pub mod quote;
pub mod theme;
pub mod tick;
