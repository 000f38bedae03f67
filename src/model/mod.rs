//! Document model types for report content representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! source-text parsing and output rendering. A [`Document`] owns an ordered,
//! flat list of [`Section`]s; nesting is expressed by each section's depth
//! level rather than by a tree. The model is immutable once parsed.

mod block;
mod document;
mod section;

pub use block::{Alignment, Block, Paragraph, Table};
pub use document::{Document, Outline, OutlineItem};
pub use section::Section;
