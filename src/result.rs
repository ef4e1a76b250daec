use geo::Polygon;
use serde::{Deserialize, Serialize};

/// One word as handed over by the text detector: its text and the corner
/// points of its box in image pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub text: String,
    pub polygon: Vec<[f32; 2]>,
}

impl Detection {
    pub fn new(text: impl Into<String>, polygon: impl IntoIterator<Item = [f32; 2]>) -> Self {
        Self {
            text: text.into(),
            polygon: polygon.into_iter().collect(),
        }
    }

    pub fn from_polygon(text: impl Into<String>, polygon: &Polygon<f32>) -> Self {
        Self::new(
            text,
            polygon.exterior().coords().map(|coord| [coord.x, coord.y]),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Blocks of lines of words.
    pub groupings: Vec<Vec<Vec<String>>>,
    /// Blocks separated by a blank line, lines by a newline, words by a space.
    pub raw_text: String,
}

/// Outcome for one image, as written by the command line tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnnotation {
    pub filename: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified_text: Option<TranscriptResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageAnnotation {
    pub fn success(filename: impl Into<String>, transcript: TranscriptResult) -> Self {
        Self {
            filename: filename.into(),
            success: true,
            simplified_text: Some(transcript),
            error: None,
        }
    }

    pub fn failure(filename: impl Into<String>, error: impl ToString) -> Self {
        Self {
            filename: filename.into(),
            success: false,
            simplified_text: None,
            error: Some(error.to_string()),
        }
    }
}
