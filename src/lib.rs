//! Yudane — a terminal viewer for judgment-deferral context types.
//!
//! A fixed catalog of Japanese conversational patterns in which the
//! speaker hands a decision, or the responsibility for it, to someone
//! else. Pick a type, read its examples and a five-stage interpretation
//! of one sentence. No statistics, no LLM, no text analysis.

pub mod catalog;
pub mod page;
pub mod tui;
