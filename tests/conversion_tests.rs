use markdown2html::to_html;

// Headings

#[test]
fn heading_levels() {
    assert_eq!(to_html("# A"), "<h1>A</h1>\n");
    assert_eq!(to_html("### B"), "<h3>B</h3>\n");
    assert_eq!(to_html("###### F"), "<h6>F</h6>\n");
}

#[test]
fn heading_level_is_unbounded() {
    assert_eq!(to_html("####### seven"), "<h7>seven</h7>\n");
}

#[test]
fn heading_text_is_trimmed() {
    assert_eq!(to_html("##    spaced out   "), "<h2>spaced out</h2>\n");
}

#[test]
fn hash_without_space_is_text() {
    assert_eq!(to_html("#hashtag"), "<p>\n#hashtag\n</p>\n");
}

// Lists

#[test]
fn unordered_list() {
    assert_eq!(
        to_html("- a\n- b\n\n"),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
    );
}

#[test]
fn ordered_list_uses_asterisk_marker() {
    assert_eq!(
        to_html("* first\n* second\n"),
        "<ol>\n<li>first</li>\n<li>second</li>\n</ol>\n"
    );
}

#[test]
fn numbered_lines_are_paragraph_text() {
    assert_eq!(to_html("1. one"), "<p>\n1. one\n</p>\n");
}

#[test]
fn list_closed_at_end_of_input_without_newline() {
    assert_eq!(to_html("- only"), "<ul>\n<li>only</li>\n</ul>\n");
}

#[test]
fn adjacent_lists_of_different_kinds() {
    assert_eq!(
        to_html("- a\n* b\n- c\n"),
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n<ul>\n<li>c</li>\n</ul>\n"
    );
}

#[test]
fn blank_line_between_items_splits_list() {
    assert_eq!(
        to_html("- a\n\n- b\n"),
        "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>\n"
    );
}

// Paragraphs

#[test]
fn paragraph_with_continuation() {
    assert_eq!(
        to_html("Hello\nWorld\n\n"),
        "<p>\nHello\n<br/>\nWorld\n</p>\n"
    );
}

#[test]
fn paragraph_closed_by_list_and_heading() {
    assert_eq!(
        to_html("text\n- item\nmore\n# Head\n"),
        "<p>\ntext\n</p>\n<ul>\n<li>item</li>\n</ul>\n<p>\nmore\n</p>\n<h1>Head</h1>\n"
    );
}

#[test]
fn ordered_item_after_text_stays_inside_paragraph() {
    assert_eq!(
        to_html("text\n* item\n"),
        "<p>\ntext\n<ol>\n<li>item</li>\n</ol>\n</p>\n"
    );
}

#[test]
fn revealed_dash_item_then_continuing_item() {
    assert_eq!(
        to_html("text\n((c- x))\n- y\n"),
        "<p>\ntext\n<ul>\n<li>x</li>\n</p>\n<li>y</li>\n</ul>\n"
    );
}

#[test]
fn comma_item_closes_paragraph_inside_ordered_list() {
    assert_eq!(
        to_html("text\n* one\n* ,two\n"),
        "<p>\ntext\n<ol>\n<li>one</li>\n</p>\n<li>,two</li>\n</ol>\n"
    );
}

#[test]
fn whitespace_only_line_ends_paragraph() {
    assert_eq!(
        to_html("a\n   \nb\n"),
        "<p>\na\n</p>\n<p>\nb\n</p>\n"
    );
}

#[test]
fn empty_input() {
    assert_eq!(to_html(""), "");
    assert_eq!(to_html("\n\n\n"), "");
}

// Inline substitutions

#[test]
fn bold_and_emphasis_in_paragraph() {
    assert_eq!(
        to_html("Some **bold** and __emphasis__"),
        "<p>\nSome <b>bold</b> and <em>emphasis</em>\n</p>\n"
    );
}

#[test]
fn inline_in_list_items() {
    assert_eq!(
        to_html("- **a**\n- __b__\n"),
        "<ul>\n<li><b>a</b></li>\n<li><em>b</em></li>\n</ul>\n"
    );
}

#[test]
fn digest_substitution() {
    assert_eq!(
        to_html("# [[hello]]"),
        "<h1>5d41402abc4b2a76b9719d911017c592</h1>\n"
    );
}

#[test]
fn strip_substitution() {
    assert_eq!(
        to_html("((Chicago)) Cubs"),
        "<p>\nhiago Cubs\n</p>\n"
    );
}

#[test]
fn bold_at_line_start_is_not_a_list_marker() {
    assert_eq!(to_html("**x** y"), "<p>\n<b>x</b> y\n</p>\n");
}

#[test]
fn unmatched_delimiters_pass_through() {
    assert_eq!(to_html("a **b __c"), "<p>\na **b __c\n</p>\n");
}

#[test]
fn no_html_escaping() {
    assert_eq!(to_html("a < b & c"), "<p>\na < b & c\n</p>\n");
}

// Mixed document

#[test]
fn full_document() {
    let input = "\
# My title
- Hello
- Bye

Hello

I'm a text
with 2 lines

## Second
* **one**
* ((cool))
";
    let expected = "\
<h1>My title</h1>
<ul>
<li>Hello</li>
<li>Bye</li>
</ul>
<p>
Hello
</p>
<p>
I'm a text
<br/>
with 2 lines
</p>
<h2>Second</h2>
<ol>
<li><b>one</b></li>
<li>ool</li>
</ol>
";
    assert_eq!(to_html(input), expected);
}
