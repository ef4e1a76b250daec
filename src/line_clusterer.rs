//! Groups words that share a baseline into left-to-right lines.
//!
//! The pool of unassigned words is drained in arrival order: the first
//! unassigned word seeds a line, every word whose bottom edge lies within
//! `baseline_tolerance * seed.height` of the seed's joins the candidate set,
//! and the candidates are walked from the leftmost one until two neighbours
//! are separated by at least `gap_tolerance * seed.height`. Only that
//! contiguous run is consumed, so words beyond the gap stay in the pool and
//! seed later lines. Results therefore depend on the input order.

use float_ord::FloatOrd;
use geo::Rect;
use tracing::instrument;

use crate::{
    util::{enclosing, next_unassigned, Bounds},
    WordBox,
};

/// Words judged to sit on one baseline, ordered left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    words: Vec<WordBox>,
    bounds: Rect<f32>,
}

impl Line {
    /// `None` when `words` is empty.
    pub fn new(words: Vec<WordBox>) -> Option<Self> {
        let bounds = enclosing(&words)?;
        Some(Self { words, bounds })
    }

    pub fn words(&self) -> &[WordBox] {
        &self.words
    }

    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(WordBox::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<WordBox> for Line {
    fn from(word: WordBox) -> Self {
        let bounds = word.bounds();
        Self {
            words: vec![word],
            bounds,
        }
    }
}

impl Bounds for Line {
    fn bounds(&self) -> Rect<f32> {
        self.bounds
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineClusterer {
    baseline_tolerance: f32,
    gap_tolerance: f32,
}

impl LineClusterer {
    pub fn new(baseline_tolerance: f32, gap_tolerance: f32) -> Self {
        Self {
            baseline_tolerance,
            gap_tolerance,
        }
    }

    /// Partitions `words` into lines, returned in the order they were closed.
    #[instrument(level = "debug", skip_all, fields(words = words.len()))]
    pub fn cluster(&self, words: Vec<WordBox>) -> Vec<Line> {
        let bounds = words.iter().map(Bounds::bounds).collect::<Vec<_>>();
        let mut pool = words.into_iter().map(Some).collect::<Vec<_>>();
        let mut lines = Vec::new();
        let mut head = 0;

        while let Some(seed) = next_unassigned(&pool, head) {
            head = seed;
            let seed_box = bounds[seed];
            let baseline_limit = seed_box.height() * self.baseline_tolerance;
            let gap_limit = seed_box.height() * self.gap_tolerance;

            let mut candidates = (seed..pool.len())
                .filter(|&i| pool[i].is_some())
                .filter(|&i| {
                    i == seed || (seed_box.bottom() - bounds[i].bottom()).abs() <= baseline_limit
                })
                .collect::<Vec<_>>();
            candidates.sort_by_key(|&i| FloatOrd(bounds[i].left()));

            let run = 1 + candidates
                .windows(2)
                .take_while(|pair| {
                    let (previous, next) = (bounds[pair[0]], bounds[pair[1]]);
                    (next.left() - previous.right()).abs() < gap_limit
                })
                .count();

            let words = candidates[..run]
                .iter()
                .filter_map(|&i| pool[i].take())
                .collect();
            log::trace!(
                "Seed {seed} closed a line of {run} out of {} baseline candidates",
                candidates.len()
            );
            lines.extend(Line::new(words));
        }

        log::debug!("Clustered {} words into {} lines", bounds.len(), lines.len());
        lines
    }
}
