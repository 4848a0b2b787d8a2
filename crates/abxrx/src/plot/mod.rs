//! Plot-ready data: the phenotype bubble grid and gene frequencies.
//!
//! Rendering is left to the caller (terminal grid in the CLI, HTML export in
//! [`crate::profile`]); this module only computes what each bubble shows.

mod bubble;
mod frequency;

pub use bubble::{AnnotationGroup, BubbleCell, BubblePlot, MIN_MARKER_SIZE};
pub use frequency::GeneFrequencyEntry;
