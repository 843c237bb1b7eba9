//! Paragraph, heading, line break and rule spacing

use htmlflow::{convert, convert_with_options, ConvertOptions, FlowError, Section};

#[test]
fn test_heading_then_paragraph() {
    let sections = convert("<h1>Title</h1><p>Body</p>").unwrap();

    assert_eq!(sections, vec![Section::new("Title\n\nBody\n\n")]);
}

#[test]
fn test_plain_paragraph() {
    let sections = convert("<p>Plain text</p>").unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].text, "Plain text\n\n");
    assert_eq!(sections[0].link, None);
}

#[test]
fn test_empty_document() {
    assert_eq!(convert("").unwrap(), Vec::<Section>::new());
}

#[test]
fn test_whitespace_only_document() {
    assert_eq!(convert("  \n\t ").unwrap(), Vec::<Section>::new());
}

#[test]
fn test_consecutive_paragraphs() {
    let sections = convert("<p>One</p>\n<p>Two</p>").unwrap();

    assert_eq!(sections, vec![Section::new("One\n\nTwo\n\n")]);
}

#[test]
fn test_heading_levels() {
    let sections = convert("<h3>A</h3><h6>B</h6>").unwrap();

    assert_eq!(sections, vec![Section::new("A\n\nB\n")]);
}

#[test]
fn test_line_break_inside_paragraph() {
    let sections = convert("<p>line one<br>line two</p>").unwrap();

    assert_eq!(sections, vec![Section::new("line one\nline two\n\n")]);
}

#[test]
fn test_text_after_paragraph() {
    let sections = convert("<p>Para</p>tail").unwrap();

    assert_eq!(sections, vec![Section::new("Para\n\ntail")]);
}

#[test]
fn test_malformed_markup_is_recovered() {
    let sections = convert("<p>unclosed <b>bold").unwrap();

    assert_eq!(sections, vec![Section::new("unclosed bold\n\n")]);
}

#[test]
fn test_transparent_containers() {
    let sections = convert("<div><span>in line</span><em>!</em></div>").unwrap();

    assert_eq!(sections, vec![Section::new("in line!")]);
}

#[test]
fn test_deep_nesting_within_default_limit() {
    let markup = format!("{}deep{}", "<div>".repeat(100), "</div>".repeat(100));

    assert_eq!(convert(&markup).unwrap(), vec![Section::new("deep")]);
}

#[test]
fn test_deep_nesting_beyond_default_limit() {
    let markup = format!("{}deep{}", "<div>".repeat(600), "</div>".repeat(600));

    assert_eq!(
        convert(&markup),
        Err(FlowError::DepthExceeded { limit: 512 })
    );
}

#[test]
fn test_custom_depth_limit() {
    let markup = format!("{}deep{}", "<div>".repeat(600), "</div>".repeat(600));
    let options = ConvertOptions::default().with_max_depth(1000);

    assert_eq!(
        convert_with_options(&markup, &options).unwrap(),
        vec![Section::new("deep")]
    );
}
