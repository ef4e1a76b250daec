use ocr_grouping::{Detection, Granularity, GroupingError, LayoutGrouperBuilder};

fn load(name: &str) -> Vec<Detection> {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = std::fs::read_to_string(format!("tests/data/{name}")).expect("Failed to read fixture");
    serde_json::from_str(&raw).expect("Failed to parse fixture")
}

fn rect(text: &str, left: f32, top: f32, right: f32, bottom: f32) -> Detection {
    Detection::new(text, [[left, top], [right, top], [right, bottom], [left, bottom]])
}

#[test]
fn letter_is_split_into_paragraphs() {
    let ocr = LayoutGrouperBuilder::new().build().expect("Failed to build grouper");
    let result = ocr.group(load("letter.json")).expect("Failed grouping.");

    assert_eq!(
        result.raw_text,
        "Dear team,\n\nThe build is green.\nShip it today.\n\nThanks"
    );
    assert_eq!(
        result.groupings,
        [
            vec![vec!["Dear", "team,"]],
            vec![
                vec!["The", "build", "is", "green."],
                vec!["Ship", "it", "today."]
            ],
            vec![vec!["Thanks"]],
        ]
    );
}

#[test]
fn every_word_lands_in_exactly_one_line() {
    let detections = load("letter.json");
    let mut expected = detections.iter().map(|d| d.text.clone()).collect::<Vec<_>>();
    let ocr = LayoutGrouperBuilder::new().build().unwrap();

    let result = ocr.group(detections).unwrap();
    let mut words = result.groupings.into_iter().flatten().flatten().collect::<Vec<_>>();

    expected.sort();
    words.sort();
    assert_eq!(words, expected);
}

#[test]
fn repeated_runs_are_identical() {
    let ocr = LayoutGrouperBuilder::new().build().unwrap();
    let first = ocr.group(load("letter.json")).unwrap();
    let second = ocr.group(load("letter.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn line_level_detections() {
    let ocr = LayoutGrouperBuilder::new()
        .granularity(Granularity::Line)
        .build()
        .unwrap();
    let result = ocr.group(load("lines.json")).unwrap();
    assert_eq!(
        result.raw_text,
        "INVOICE 2041\n\nCoffee beans 1kg\nMilk 2L\n\nTotal 23.50"
    );
}

#[test]
fn empty_fixture_reports_no_text() {
    let ocr = LayoutGrouperBuilder::new().build().unwrap();
    let err = ocr.group(load("empty.json")).unwrap_err();
    assert_eq!(err, GroupingError::NoTextDetected);
}

#[test]
fn three_touching_words_make_one_line_and_block() {
    let ocr = LayoutGrouperBuilder::new().build().unwrap();
    let result = ocr
        .group([
            rect("one", 0.0, 0.0, 30.0, 20.0),
            rect("two", 31.0, 0.0, 60.0, 20.0),
            rect("three", 61.0, 0.0, 110.0, 20.0),
        ])
        .unwrap();
    assert_eq!(result.groupings.len(), 1);
    assert_eq!(result.groupings[0].len(), 1);
    assert_eq!(result.raw_text, "one two three");
}

#[test]
fn gap_of_half_height_breaks_the_line() {
    let ocr = LayoutGrouperBuilder::new().build().unwrap();
    let result = ocr
        .group([
            rect("left", 0.0, 0.0, 40.0, 20.0),
            rect("right", 50.0, 0.0, 90.0, 20.0),
        ])
        .unwrap();
    let lines = result.groupings.iter().flatten().collect::<Vec<_>>();
    assert_eq!(lines, [&vec!["left"], &vec!["right"]]);
}

#[test]
fn input_order_decides_the_seed() {
    let ocr = LayoutGrouperBuilder::new().build().unwrap();
    let big = rect("Big", 0.0, 0.0, 40.0, 40.0);
    let small = rect("small", 45.0, 24.0, 70.0, 34.0);

    // the tall seed's tolerance reaches the small word
    let tall_first = ocr.group([big.clone(), small.clone()]).unwrap();
    assert_eq!(tall_first.raw_text, "Big small");

    // the small seed's tolerance doesn't reach the tall word, and the small
    // line's center lies outside the tall line's span
    let small_first = ocr.group([small, big]).unwrap();
    assert_eq!(small_first.raw_text, "small\n\nBig");
}

#[test]
fn block_chain_depends_on_line_order() {
    let ocr = LayoutGrouperBuilder::new()
        .granularity(Granularity::Line)
        .build()
        .unwrap();
    let a = rect("a", 0.0, 0.0, 100.0, 20.0);
    let b = rect("b", 40.0, 25.0, 140.0, 45.0);
    let c = rect("c", 110.0, 50.0, 150.0, 70.0);

    let chained = ocr.group([a.clone(), b.clone(), c.clone()]).unwrap();
    assert_eq!(chained.raw_text, "a\nb\nc");

    let skipped = ocr.group([a, c, b]).unwrap();
    assert_eq!(skipped.raw_text, "a\nb\n\nc");
}
