use tracing::instrument;

use crate::{Block, Line, TranscriptResult};

/// Flattens the block tree, keeping block, line and word order as clustered.
#[instrument(level = "trace", skip_all, fields(blocks = blocks.len()))]
pub fn assemble(blocks: &[Block]) -> TranscriptResult {
    let groupings = blocks
        .iter()
        .map(|block| {
            block
                .lines()
                .iter()
                .map(|line| line.words().iter().map(|word| word.text().to_owned()).collect())
                .collect()
        })
        .collect::<Vec<Vec<Vec<String>>>>();

    let raw_text = blocks
        .iter()
        .map(|block| {
            block
                .lines()
                .iter()
                .map(Line::text)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    TranscriptResult {
        groupings,
        raw_text,
    }
}

#[cfg(test)]
mod tests {
    use geo::{coord, Rect};

    use super::*;
    use crate::{Line, WordBox};

    fn line(words: &[&str]) -> Line {
        let words = words
            .iter()
            .map(|text| {
                let bounds = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 });
                WordBox::new(*text, bounds)
            })
            .collect();
        Line::new(words).unwrap()
    }

    #[test]
    fn joins_words_lines_and_blocks() {
        let blocks = vec![
            Block::new(vec![line(&["Dear", "reader,"]), line(&["hello"])]).unwrap(),
            Block::new(vec![line(&["Regards"])]).unwrap(),
        ];
        let result = assemble(&blocks);
        assert_eq!(
            result.groupings,
            [
                vec![vec!["Dear", "reader,"], vec!["hello"]],
                vec![vec!["Regards"]],
            ]
        );
        assert_eq!(result.raw_text, "Dear reader,\nhello\n\nRegards");
    }

    #[test]
    fn raw_text_lines_are_line_text() {
        let lines = vec![line(&["a", "b"]), line(&["c"])];
        let expected = lines.iter().map(Line::text).collect::<Vec<_>>().join("\n");
        let blocks = vec![Block::new(lines).unwrap()];
        assert_eq!(assemble(&blocks).raw_text, expected);
    }

    #[test]
    fn word_text_is_passed_through_untouched() {
        let blocks = vec![Block::new(vec![line(&[" spaced ", ""])]).unwrap()];
        assert_eq!(assemble(&blocks).raw_text, " spaced  ");
    }

    #[test]
    fn no_blocks_is_empty_text() {
        let result = assemble(&[]);
        assert!(result.groupings.is_empty());
        assert_eq!(result.raw_text, "");
    }
}
