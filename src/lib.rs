//! Rebuilds reading order from word-level OCR detections: words sharing a
//! baseline become lines, stacked and aligned lines become blocks, and the
//! blocks are flattened into a transcript.

mod assembler;
pub mod block_clusterer;
pub mod cli;
mod error;
pub mod line_clusterer;
mod result;
pub mod util;
mod word_box;

pub use assembler::assemble;
pub use block_clusterer::{Block, BlockClusterer};
pub use error::{GroupingError, Result};
pub use line_clusterer::{Line, LineClusterer};
pub use result::*;
use tracing::instrument;
pub use word_box::WordBox;

/// What a single detection covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Granularity {
    /// One word per detection; words are first clustered into lines.
    #[default]
    Word,
    /// One whole text line per detection; line clustering is skipped.
    Line,
}

pub struct LayoutGrouperBuilder {
    baseline_tolerance: f32,
    gap_tolerance: f32,
    line_spacing: f32,
    granularity: Granularity,
}

impl LayoutGrouperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allowed difference between bottom edges, as a fraction of the seed
    /// word's height.
    pub fn baseline_tolerance(mut self, tolerance: f32) -> Self {
        self.baseline_tolerance = tolerance;
        self
    }

    /// Widest horizontal gap between neighbouring words of one line, as a
    /// fraction of the seed word's height (exclusive).
    pub fn gap_tolerance(mut self, tolerance: f32) -> Self {
        self.gap_tolerance = tolerance;
        self
    }

    /// Largest distance from the anchor's bottom to the next line's top, as a
    /// fraction of the anchor's height (exclusive).
    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    #[instrument(skip(self), level = "debug")]
    pub fn build(self) -> Result<LayoutGrouper> {
        for (name, value) in [
            ("baseline_tolerance", self.baseline_tolerance),
            ("gap_tolerance", self.gap_tolerance),
            ("line_spacing", self.line_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GroupingError::InvalidOptions { name, value });
            }
        }
        Ok(LayoutGrouper {
            lines: LineClusterer::new(self.baseline_tolerance, self.gap_tolerance),
            blocks: BlockClusterer::new(self.line_spacing),
            granularity: self.granularity,
        })
    }
}

impl Default for LayoutGrouperBuilder {
    fn default() -> Self {
        Self {
            baseline_tolerance: 0.5,
            gap_tolerance: 0.5,
            line_spacing: 0.75,
            granularity: Granularity::Word,
        }
    }
}

/// Stateless once built; one instance can serve any number of images.
#[derive(Debug, Clone, Copy)]
pub struct LayoutGrouper {
    lines: LineClusterer,
    blocks: BlockClusterer,
    granularity: Granularity,
}

impl LayoutGrouper {
    /// Groups the detections of one image into a transcript.
    ///
    /// Fails with [`GroupingError::NoTextDetected`] when `detections` is empty
    /// and with [`GroupingError::InvalidDetection`] on the first malformed
    /// polygon.
    #[instrument(skip(self, detections))]
    pub fn group(
        &self,
        detections: impl IntoIterator<Item = Detection>,
    ) -> Result<TranscriptResult> {
        let words = detections
            .into_iter()
            .enumerate()
            .map(|(index, detection)| WordBox::from_detection(index, detection))
            .collect::<Result<Vec<_>>>()?;
        if words.is_empty() {
            return Err(GroupingError::NoTextDetected);
        }
        let blocks = self.layout(words);
        Ok(assemble(&blocks))
    }

    /// Runs the clustering stages and returns the block tree with geometry.
    #[instrument(skip_all, level = "debug", fields(words = words.len()))]
    pub fn layout(&self, words: Vec<WordBox>) -> Vec<Block> {
        let lines = match self.granularity {
            Granularity::Word => self.lines.cluster(words),
            Granularity::Line => words.into_iter().map(Line::from).collect(),
        };
        self.blocks.cluster(lines)
    }
}
