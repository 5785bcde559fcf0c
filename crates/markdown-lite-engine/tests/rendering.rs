use markdown_lite_engine::{FragmentKind, MarkdownParser, RenderOptions, to_html};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("# Title", "<h1>Title</h1>")]
#[case("Title\n=====", "<h1>Title</h1>")]
#[case("Title\n---", "<h2>Title</h2>")]
#[case("**bold**", "<p><strong>bold</strong></p>")]
#[case("__bold__ _em_", "<p><strong>bold</strong> <em>em</em></p>")]
#[case("a\n\nb", "<p>a</p><br><p>b</p>")]
#[case("a & b > c", "<p>a &amp; b &gt; c</p>")]
#[case("<div>x</div>", "<div>x</div>")]
#[case("## **Bold** title", "<h2><strong>Bold</strong> title</h2>")]
#[case("####### seven", "<h6># seven</h6>")]
#[case("# A\r\nb", "<h1>A</h1><p>b</p>")]
#[case(r"\*literal\*", r"<p>\*literal\*</p>")]
#[case("> # Quoted", "<blockquote><h1>Quoted</h1></blockquote>")]
#[case("> Title\n> ===", "<blockquote><h1>Title</h1></blockquote>")]
#[case("Intro\n\n---", "<p>Intro</p><h2><br></h2>")]
#[case("> a\n---", "<blockquote><p>a</p><h2></blockquote></h2>")]
#[case("> a\nb", "<blockquote><p>a</p></blockquote><p>b</p>")]
#[case("```\n*a* <b>\n```", "<pre>*a* &lt;b&gt;\n</pre>")]
#[case("```js extra```\nx\n```", "<pre class=\"lang-js extra\">x\n</pre>")]
fn renders(#[case] markdown: &str, #[case] html: &str) {
    assert_eq!(to_html(markdown), html);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\t\r\n")]
fn blank_input_renders_nothing(#[case] markdown: &str) {
    assert_eq!(to_html(markdown), "");
}

#[test]
fn quote_lines_share_one_blockquote() {
    let html = to_html("> quoted\n> still quoted");
    assert_eq!(html.matches("<blockquote>").count(), 1);
    assert_eq!(html.matches("</blockquote>").count(), 1);
    insta::assert_snapshot!(html, @"<blockquote><p>quoted</p><p>still quoted</p></blockquote>");
}

#[test]
fn nested_quotes_balance() {
    let html = to_html("> a\n>> b\n> a");
    assert_eq!(html.matches("<blockquote>").count(), 2);
    assert_eq!(html.matches("</blockquote>").count(), 2);
    insta::assert_snapshot!(html, @"<blockquote><p>a</p><blockquote><p>b</p></blockquote><p>a</p></blockquote>");
}

#[test]
fn fenced_code_with_language() {
    insta::assert_snapshot!(to_html("```js\ncode\n```"), @r#"
    <pre class="lang-js">code
    </pre>
    "#);
}

#[test]
fn fence_content_is_never_wrapped_or_emphasised() {
    let mut parser = MarkdownParser::default();
    let fragments = parser.fragments("```\n**x** <y>\n```");
    let interior = &fragments[1];
    assert_eq!(interior.kind, FragmentKind::Escaped);
    assert_eq!(interior.text, "**x** &lt;y&gt;\n");
}

#[test]
fn markup_is_not_escaped_twice() {
    let html = to_html("<em>a & b</em>");
    assert_eq!(html, "<em>a & b</em>");
}

/// Unterminated fences are left open on purpose. Changing this changes
/// observable output and should be deliberate.
#[test]
fn unterminated_fence_is_not_closed() {
    let html = to_html("```\ncode");
    assert_eq!(html, "<pre>code\n");
    assert!(!html.contains("</pre>"));
}

#[test]
fn unterminated_fence_closed_on_request() {
    let mut parser = MarkdownParser::new(RenderOptions {
        close_unterminated_fences: true,
        ..RenderOptions::default()
    });
    assert_eq!(parser.parse("```\ncode"), "<pre>code\n</pre>");
}

#[test]
fn unterminated_blockquote_is_closed() {
    assert_eq!(
        to_html(">>> deep"),
        "<blockquote><blockquote><blockquote><p>deep</p></blockquote></blockquote></blockquote>"
    );
}

#[test]
fn sequential_parses_are_independent() {
    let mut parser = MarkdownParser::default();

    let first = parser.parse("> open\n```\nunterminated");
    assert_eq!(
        first,
        "<blockquote><p>open</p><pre>unterminated\n</blockquote>"
    );
    assert!(parser.state().inside_code_fence);

    parser.reset();
    let second = parser.parse("plain");
    assert_eq!(second, "<p>plain</p>");
    assert_eq!(parser.state().blockquote_level, 0);
    assert!(!parser.state().inside_code_fence);
}

#[test]
fn glue_separates_fragments() {
    let mut parser = MarkdownParser::new(RenderOptions {
        glue: "\n".into(),
        ..RenderOptions::default()
    });
    assert_eq!(parser.parse("# A\nb"), "<h1>A</h1>\n<p>b</p>");
}

#[test]
fn custom_code_class_prefix() {
    let mut parser = MarkdownParser::new(RenderOptions {
        code_class_prefix: "language-".into(),
        ..RenderOptions::default()
    });
    assert_eq!(
        parser.parse("```rust\nfn f() {}\n```"),
        "<pre class=\"language-rust\">fn f() {}\n</pre>"
    );
}

#[test]
fn fixture_mixed_document() {
    assert_fixture("mixed_document");
}

#[test]
fn fixture_fence_edge_cases() {
    assert_fixture("fence_edge_cases");
}

fn assert_fixture(name: &str) {
    let dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{dir}/{name}.html")).unwrap();

    assert_eq!(to_html(&md), expected.trim_end());
}
