//! HTML report snapshot tests for determinism and structure.
//!
//! These tests verify that report rendering is:
//! - Deterministic (same options and items produce identical output)
//! - Structurally stable across the loading lifecycle
//! - Properly escaping vault-controlled content

use op_export::item::{Item, ItemDetails, ItemField, ItemOverview, Section, SectionField, TEMPLATE_UUID_LOGIN};
use op_export::report::{HtmlRenderer, ViewOptions};

/// Create a login item with resolved credentials.
fn login_item(title: &str, url: &str, username: &str, password: &str) -> Item {
    Item {
        uuid: format!("uuid-{title}"),
        template_uuid: TEMPLATE_UUID_LOGIN.to_string(),
        overview: ItemOverview {
            title: title.to_string(),
            url: url.to_string(),
        },
        details: Some(ItemDetails {
            fields: vec![
                ItemField {
                    designation: "username".to_string(),
                    value: username.to_string(),
                    ..Default::default()
                },
                ItemField {
                    designation: "password".to_string(),
                    value: password.to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }),
    }
}

#[test]
fn test_html_output_determinism() {
    let renderer = HtmlRenderer::new();
    let options = ViewOptions::new("Export").with_url().with_inline_css();
    let items = vec![
        login_item("Site A", "https://a.example", "alice", "p1"),
        login_item("Site B", "https://b.example", "bob", "p2"),
    ];

    let html1 = renderer.render_document(&options, &items);
    let html2 = renderer.render_document(&options, &items);

    assert_eq!(html1, html2, "HTML output should be deterministic");
}

#[test]
fn test_html_contains_doctype_and_structure() {
    let renderer = HtmlRenderer::new();
    let html = renderer.render_document(&ViewOptions::new("Export"), &[]);

    assert!(
        html.starts_with("<!doctype html>"),
        "Should start with doctype"
    );
    assert!(html.contains("<html"), "Should contain html tag");
    assert!(html.contains("</html>"), "Should close html tag");
    assert!(html.contains("<head>"), "Should contain head");
    assert!(html.contains("<body>"), "Should contain body");
    assert!(html.contains("<main class=\"main\">"), "Should contain main");
    assert!(
        html.contains("<header class=\"header\">"),
        "Should contain header"
    );
}

#[test]
fn test_html_single_login_worked_example() {
    let renderer = HtmlRenderer::new();
    let options = ViewOptions::new("Export").with_url();
    let items = vec![login_item("Site A", "https://a.example", "alice", "p1")];

    let html = renderer.render_document(&options, &items);

    assert_eq!(
        html.matches("<article class=\"item\">").count(),
        1,
        "Exactly one article expected"
    );
    assert!(html.contains("<title>Export</title>"));
    assert!(html.contains("<h2 class=\"item__title\">Site A</h2>"));
    assert!(html.contains("<dt class=\"dl__dt\">url:</dt><dd class=\"dl__dd\">https://a.example</dd>"));
    assert!(html.contains("<dt class=\"dl__dt\">username:</dt><dd class=\"dl__dd\">alice</dd>"));
    assert!(html.contains("<dt class=\"dl__dt\">password:</dt><dd class=\"dl__dd\">p1</dd>"));
    assert!(
        !html.contains("<h3 class=\"item__title\">"),
        "No subsection headings expected"
    );
    assert!(!html.contains("header__date"), "Date line is off by default");
}

#[test]
fn test_html_monotonic_growth() {
    let renderer = HtmlRenderer::new();
    let options = ViewOptions::new("Export").with_url();

    let first = login_item("Site A", "https://a.example", "alice", "p1");
    let second = login_item("Site B", "https://b.example", "bob", "p2");

    let html1 = renderer.render_document(&options, std::slice::from_ref(&first));
    let html2 = renderer.render_document(&options, &[first, second]);

    // The first item's article must be carried over verbatim.
    let start = html1.find("<article").expect("article in first render");
    let end = html1.find("</article>").expect("article close in first render");
    let article = &html1[start..end + "</article>".len()];
    assert!(
        html2.contains(article),
        "First item's article should be unchanged by growth"
    );

    assert_eq!(html2.matches("<article class=\"item\">").count(), 2);
    let a = html2.find("Site A").expect("Site A present");
    let b = html2.find("Site B").expect("Site B present");
    assert!(a < b, "Items should keep listing order");
}

#[test]
fn test_html_loading_indicator_lifecycle() {
    let renderer = HtmlRenderer::new();
    let mut options = ViewOptions::new("Export").with_auto_reload();
    let items = vec![login_item("Site A", "https://a.example", "alice", "p1")];

    let loading = renderer.render_document(&options, &items);
    assert!(
        loading.contains("class=\"loading\""),
        "Loading block expected while export runs"
    );
    assert!(loading.contains("<svg"), "Spinner SVG expected");
    assert!(
        loading.contains("window.location.reload()"),
        "Reload script expected"
    );

    options.mark_loading_complete();
    let done = renderer.render_document(&options, &items);
    assert!(!done.contains("class=\"loading\""), "Indicator must be gone");
    assert!(!done.contains("<script"), "Reload script must be gone");

    // Completing twice changes nothing.
    options.mark_loading_complete();
    let done_again = renderer.render_document(&options, &items);
    assert_eq!(done, done_again, "Second completion must be a no-op");
}

#[test]
fn test_html_css_modes() {
    let renderer = HtmlRenderer::new();
    let items = vec![login_item("Site A", "https://a.example", "alice", "p1")];

    let inline = renderer.render_document(&ViewOptions::new("Export").with_inline_css(), &items);
    assert!(inline.contains("<style>"), "Inline mode embeds a style block");
    assert!(
        inline.contains("max-width: 768px;"),
        "Inline mode embeds the stylesheet rules"
    );

    let linked =
        renderer.render_document(&ViewOptions::new("Export").with_linked_css("out.css"), &items);
    assert!(
        linked.contains("<link rel=\"stylesheet\" href=\"out.css\">"),
        "Linked mode references the stylesheet file"
    );
    assert!(!linked.contains("<style>"), "Linked mode embeds nothing");
}

#[test]
fn test_html_escapes_dangerous_content() {
    let renderer = HtmlRenderer::new();
    let mut item = login_item(
        "<script>alert('xss')</script>",
        "https://x.example/?a=1&b=2",
        "<img onerror=alert(1)>",
        "p&w\"d",
    );
    item.details.as_mut().unwrap().sections = vec![Section {
        title: "</main><script>alert(2)</script>".to_string(),
        fields: vec![SectionField {
            title: "q&a".to_string(),
            value: "<svg onload=alert(3)>".to_string(),
        }],
        ..Default::default()
    }];

    let html = renderer.render_document(&ViewOptions::new("Export").with_url(), &[item]);

    assert!(
        !html.contains("<script>alert"),
        "Should escape script tags in vault content"
    );
    assert!(
        !html.contains("<img onerror"),
        "Should escape img tags in vault content"
    );
    assert!(
        !html.contains("<svg onload"),
        "Should escape svg handlers in vault content"
    );
    assert!(html.contains("&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"));
    assert!(html.contains("https://x.example/?a=1&amp;b=2"));
    assert!(html.contains("p&amp;w&quot;d"));
}
