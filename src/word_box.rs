use geo::Rect;

use crate::{
    util::{polygon_bounds, Bounds},
    Detection, GroupingError, Result,
};

/// One recognized word reduced to its axis-aligned bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct WordBox {
    text: String,
    bounds: Rect<f32>,
}

impl WordBox {
    pub fn new(text: impl Into<String>, bounds: Rect<f32>) -> Self {
        Self {
            text: text.into(),
            bounds,
        }
    }

    /// Normalizes the `index`-th detection of an image. Fails on an empty
    /// polygon or one with non-finite coordinates.
    pub fn from_detection(index: usize, detection: Detection) -> Result<Self> {
        let Detection { text, polygon } = detection;
        if polygon
            .iter()
            .flatten()
            .any(|coordinate| !coordinate.is_finite())
        {
            return Err(GroupingError::InvalidDetection {
                index,
                reason: format!("polygon of {text:?} has a non-finite coordinate"),
            });
        }
        let bounds = polygon_bounds(&polygon).ok_or_else(|| GroupingError::InvalidDetection {
            index,
            reason: format!("polygon of {text:?} is empty"),
        })?;
        Ok(Self { text, bounds })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Bounds for WordBox {
    fn bounds(&self) -> Rect<f32> {
        self.bounds
    }
}
