use rs_problem_extract::{segment, segment_bytes, segment_with_options, Example, Options, Segments};

const BASIC: &str = "<p>Given an array.</p><strong>Example 1:</strong><pre>Input: [1]\nOutput: 1</pre><strong>Constraints:</strong><ul><li>1 &lt;= n</li></ul>";

/// Description, one example, constraints, no follow-up.
#[test]
fn basic_statement_is_segmented() {
    let segments = segment(BASIC);

    assert_eq!(
        segments,
        Segments {
            description: "Given an array.".to_string(),
            examples: vec![Example {
                index: 1,
                text: "Input: [1]\nOutput: 1".to_string(),
                images: vec![],
            }],
            constraints: vec!["1 <= n".to_string()],
            follow_ups: vec![],
        }
    );
}

#[test]
fn image_immediately_before_block_is_attached() {
    let html = BASIC.replace("<pre>", "<img src=\"a.png\"><pre>");
    let segments = segment(&html);

    assert_eq!(segments.examples[0].images, ["a.png"]);
    assert_eq!(segments.description, "Given an array.");
}

#[test]
fn container_fallback_fires_without_preformatted_blocks() {
    let html = r#"<div class="example-block"><p>Input: x</p><img src="b.png"></div>"#;
    let segments = segment(html);

    assert_eq!(
        segments.examples,
        [Example {
            index: 1,
            text: "Input: x".to_string(),
            images: vec!["b.png".to_string()],
        }]
    );
}

#[test]
fn follow_up_in_paragraph_yields_remainder() {
    let segments = segment("<p><strong>Follow up:</strong> Can you do it in O(1)?</p>");
    assert_eq!(segments.follow_ups, ["Can you do it in O(1)?"]);
}

#[test]
fn missing_sections_are_empty_not_errors() {
    let segments = segment("<p>Just a paragraph.</p><p>And another.</p>");

    assert_eq!(segments.description, "Just a paragraph.\nAnd another.");
    assert!(segments.examples.is_empty());
    assert!(segments.constraints.is_empty());
    assert!(segments.follow_ups.is_empty());
}

#[test]
fn example_indices_are_contiguous_from_one() {
    let mut html = String::from("<p>Intro.</p>");
    for i in 1..=7 {
        html.push_str(&format!("<p><strong>Example {i}:</strong></p><pre>Input: {i}</pre>"));
    }
    let segments = segment(&html);

    let indices: Vec<usize> = segments.examples.iter().map(|e| e.index).collect();
    assert_eq!(indices, (1..=7).collect::<Vec<_>>());
    assert_eq!(segments.examples[6].text, "Input: 7");
}

#[test]
fn strategies_are_mutually_exclusive() {
    let html = r#"<pre>Input: 1</pre><div class="example-block"><p>Input: 2</p></div>"#;
    let segments = segment(html);

    assert_eq!(segments.examples.len(), 1);
    assert_eq!(segments.examples[0].text, "Input: 1");
}

#[test]
fn constraints_list_need_not_be_a_sibling() {
    let html = "<div><p><strong>Constraints:</strong></p></div><div><ul><li><code>1 &lt;= n &lt;= 10<sup>5</sup></code></li><li>n is even</li></ul></div>";
    assert_eq!(segment(html).constraints, ["1 <= n <= 105", "n is even"]);
}

#[test]
fn custom_container_class() {
    let html = r#"<div class="sample"><p>Input: y</p></div>"#;
    let options = Options {
        example_block_class: "sample".to_string(),
        ..Options::default()
    };

    assert!(segment(html).examples.is_empty());
    assert_eq!(segment_with_options(html, &options).examples[0].text, "Input: y");
}

#[test]
fn bounded_image_search_keeps_images_with_their_example() {
    let html = r#"<img src="one.png"><pre>first</pre><p><strong>Example 2:</strong></p><pre>second</pre>"#;

    let literal = segment(html);
    assert_eq!(literal.examples[1].images, ["one.png"]);

    let options = Options {
        bound_image_search: true,
        ..Options::default()
    };
    let bounded = segment_with_options(html, &options);
    assert_eq!(bounded.examples[0].images, ["one.png"]);
    assert!(bounded.examples[1].images.is_empty());
}

#[test]
fn relative_images_resolve_against_base_url() {
    let html = r#"<img src="/uploads/tree.png"><pre>x</pre><img src="data:image/png;base64,AA=="><pre>y</pre>"#;
    let options = Options {
        base_url: Some("https://leetcode.com/problems/x/".to_string()),
        ..Options::default()
    };
    let segments = segment_with_options(html, &options);

    assert_eq!(segments.examples[0].images, ["https://leetcode.com/uploads/tree.png"]);
    assert_eq!(segments.examples[1].images, ["data:image/png;base64,AA=="]);
}

#[test]
fn bytes_input_detects_declared_charset() {
    let html = b"<meta charset=\"windows-1252\"><p>R\xE9sum\xE9 the \x93array\x94.</p><pre>Input: 1</pre>";
    let segments = segment_bytes(html);

    assert_eq!(segments.description, "R\u{e9}sum\u{e9} the \u{201c}array\u{201d}.");
    assert_eq!(segments.examples.len(), 1);
}

#[test]
fn segmentation_is_idempotent() {
    let html = r#"<p>Intro.</p><p><strong>Example 1:</strong></p><img src="a.png"><pre>Input: 1</pre>
<p><strong>Constraints:</strong></p><ul><li>a</li><li>b</li></ul>
<p><strong>Follow-up:</strong> faster?</p>"#;

    let first = serde_json::to_string(&segment(html)).unwrap();
    let second = serde_json::to_string(&segment(html)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn statement_inside_a_wrapper_div() {
    let html = "<div><p>Given an array.</p><ul><li>note</li></ul><p><strong>Example 1:</strong></p><pre>Input: 1</pre>\
                <strong>Constraints:</strong><ul><li>1 &lt;= n</li></ul><strong>Follow-up:</strong> faster?</div>";
    let segments = segment(html);

    assert_eq!(segments.description, "Given an array.");
    assert_eq!(segments.examples.len(), 1);
    assert_eq!(segments.constraints, ["1 <= n"]);
    assert_eq!(segments.follow_ups, ["faster?"]);
}

#[test]
fn nested_example_containers_are_one_example() {
    let html = r#"<div class="example-block"><div class="example-block"><p>Input: x</p></div></div>"#;
    let segments = segment(html);

    assert_eq!(segments.examples.len(), 1);
    assert_eq!(segments.examples[0].text, "Input: x");
}
