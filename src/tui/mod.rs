//! The viewer — ratatui TUI presentation layer.
//!
//! Renders one page for the selected context type. Read-only: the TUI
//! never mutates the catalog. No model, no inference, pure Rust rendering.
//!
//! ## Architecture (TEA)
//!
//! Model (`ViewerApp`) + Update (message handler) + View (render).
//! Immediate mode, no retained widget state beyond menu and scroll.
//! The page model (`crate::page`) decouples the catalog from ratatui.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod markdown;
pub mod runner;
