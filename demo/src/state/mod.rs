//! Application state shared via Leptos context.

pub mod signature;
