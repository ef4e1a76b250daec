//! Chains vertically adjacent, horizontally aligned lines into blocks.

use geo::Rect;
use tracing::instrument;

use crate::{
    util::{enclosing, next_unassigned, Bounds},
    Line,
};

/// A paragraph-like run of lines, in the order they were chained.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    lines: Vec<Line>,
    bounds: Rect<f32>,
}

impl Block {
    /// `None` when `lines` is empty.
    pub fn new(lines: Vec<Line>) -> Option<Self> {
        let bounds = enclosing(&lines)?;
        Some(Self { lines, bounds })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

impl Bounds for Block {
    fn bounds(&self) -> Rect<f32> {
        self.bounds
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockClusterer {
    line_spacing: f32,
}

impl BlockClusterer {
    pub fn new(line_spacing: f32) -> Self {
        Self { line_spacing }
    }

    /// The first unassigned line anchors a block. The remaining pool is
    /// scanned once, in order, and each accepted line becomes the new anchor,
    /// so a line is compared against its predecessor in the chain rather than
    /// the first line of the block. Lines skipped during the scan are not
    /// revisited until they anchor or join a later block.
    #[instrument(level = "debug", skip_all, fields(lines = lines.len()))]
    pub fn cluster(&self, lines: Vec<Line>) -> Vec<Block> {
        let bounds = lines.iter().map(Bounds::bounds).collect::<Vec<_>>();
        let mut pool = lines.into_iter().map(Some).collect::<Vec<_>>();
        let mut blocks = Vec::new();
        let mut head = 0;

        while let Some(first) = next_unassigned(&pool, head) {
            head = first;
            let mut members = vec![first];
            let mut anchor = bounds[first];

            for (i, line) in bounds.iter().enumerate().skip(first + 1) {
                if pool[i].is_some() && self.continues(&anchor, line) {
                    members.push(i);
                    anchor = *line;
                }
            }

            log::trace!("Line {first} anchored a block of {} lines", members.len());
            let lines = members
                .into_iter()
                .filter_map(|i| pool[i].take())
                .collect();
            blocks.extend(Block::new(lines));
        }

        log::debug!("Clustered {} lines into {} blocks", bounds.len(), blocks.len());
        blocks
    }

    /// Close enough below the anchor, with its center strictly inside the
    /// anchor's horizontal span.
    fn continues(&self, anchor: &Rect<f32>, line: &Rect<f32>) -> bool {
        let adjacent = line.top() - anchor.bottom() < anchor.height() * self.line_spacing;
        let center = line.center_x();
        adjacent && anchor.left() < center && center < anchor.right()
    }
}
