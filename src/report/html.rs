//! HTML document renderer for the export report.
//!
//! Produces a standalone HTML file that renders:
//! - Header with the report title and optional export date
//! - One article per item with url/username/password rows
//! - Extra item sections as nested definition lists
//! - An animated loading indicator plus reload script while the export runs
//!
//! All user-controlled strings are HTML-escaped for XSS safety; vault
//! contents are untrusted input.

use std::io;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::item::Item;
use crate::report::view::{CssMode, DisplayItem, ViewOptions};

/// Stylesheet for the report, served inline or as a linked file.
const STYLESHEET: &str = r#".main {
  margin: 0 auto;
  max-width: 768px;
}
.header {
  display: flex;
  flex-direction: row;
  flex-wrap: wrap;
  align-items: center;
}
.header__date {
  margin-left: auto;
}
.item {
  -webkit-column-break-inside: avoid;
  page-break-inside: avoid;
  break-inside: avoid;
}
.dl {
  display: grid;
  grid-template-columns: auto auto;
  justify-content: start;
  margin-left: 2em;
}
.dl__dd {
  margin-left: 1em;
}
.loading {
  display: grid;
  grid-template-columns: auto auto;
  justify-content: center;
  margin-top: 2em;
}
.loading__text {
  margin-left: 1em;
}"#;

/// Animated eight-circle spinner shown while the export is in progress.
const LOADING_SVG: &str = r##"<!-- By Sam Herbert (@sherb), for everyone. More @ http://goo.gl/7AJzbL -->
<svg width="58" height="58" viewBox="0 0 58 58" xmlns="http://www.w3.org/2000/svg">
<g fill="none" fill-rule="evenodd">
<g transform="translate(2 1)" stroke="#000" stroke-width="1.5">
<circle cx="42.601" cy="11.462" r="5" fill-opacity="1" fill="#000">
<animate attributeName="fill-opacity" begin="0s" dur="1.3s" values="1;0;0;0;0;0;0;0" calcMode="linear" repeatCount="indefinite" />
</circle>
<circle cx="49.063" cy="27.063" r="5" fill-opacity="0" fill="#000">
<animate attributeName="fill-opacity" begin="0s" dur="1.3s" values="0;1;0;0;0;0;0;0" calcMode="linear" repeatCount="indefinite" />
</circle>
<circle cx="42.601" cy="42.663" r="5" fill-opacity="0" fill="#000">
<animate attributeName="fill-opacity" begin="0s" dur="1.3s" values="0;0;1;0;0;0;0;0" calcMode="linear" repeatCount="indefinite" />
</circle>
<circle cx="27" cy="49.125" r="5" fill-opacity="0" fill="#000">
<animate attributeName="fill-opacity" begin="0s" dur="1.3s" values="0;0;0;1;0;0;0;0" calcMode="linear" repeatCount="indefinite" />
</circle>
<circle cx="11.399" cy="42.663" r="5" fill-opacity="0" fill="#000">
<animate attributeName="fill-opacity" begin="0s" dur="1.3s" values="0;0;0;0;1;0;0;0" calcMode="linear" repeatCount="indefinite" />
</circle>
<circle cx="4.938" cy="27.063" r="5" fill-opacity="0" fill="#000">
<animate attributeName="fill-opacity" begin="0s" dur="1.3s" values="0;0;0;0;0;1;0;0" calcMode="linear" repeatCount="indefinite" />
</circle>
<circle cx="11.399" cy="11.462" r="5" fill-opacity="0" fill="#000">
<animate attributeName="fill-opacity" begin="0s" dur="1.3s" values="0;0;0;0;0;0;1;0" calcMode="linear" repeatCount="indefinite" />
</circle>
<circle cx="27" cy="5" r="5" fill-opacity="0" fill="#000">
<animate attributeName="fill-opacity" begin="0s" dur="1.3s" values="0;0;0;0;0;0;0;1" calcMode="linear" repeatCount="indefinite" />
</circle>
</g>
</g>
</svg>"##;

/// Reload script emitted alongside the loading indicator. A fresh page load
/// every two seconds picks up whatever the export loop wrote last.
const RELOAD_SCRIPT: &str = "<script>\nwindow.setInterval(() => { window.location.reload() }, 2000);\n</script>\n";

/// HTML-escape a string for safe insertion into HTML content.
///
/// Escapes: & < > " '
/// This covers text nodes and double-quoted attribute values, the only two
/// positions the renderer inserts dynamic strings into.
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Current wall-clock time as `YYYY/MM/DD HH:MM:SS`.
///
/// Prefers the local offset; falls back to UTC when the platform cannot
/// determine it (multi-threaded processes on some Unixes).
fn format_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp_at(now)
}

fn format_timestamp_at(at: OffsetDateTime) -> String {
    let format = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    at.format(&format).unwrap_or_default()
}

/// Render one item as an `<article>` block.
fn render_item(display: &DisplayItem, show_url: bool) -> String {
    let title = html_escape(&display.title);
    let username = html_escape(&display.username);
    let password = html_escape(&display.password);

    let mut html = String::with_capacity(512);
    html.push_str("<article class=\"item\">\n");
    html.push_str(&format!("<h2 class=\"item__title\">{title}</h2>\n"));
    html.push_str("<dl class=\"dl\">\n");
    if show_url {
        let url = html_escape(&display.url);
        html.push_str(&format!(
            "<dt class=\"dl__dt\">url:</dt><dd class=\"dl__dd\">{url}</dd>\n"
        ));
    }
    html.push_str(&format!(
        "<dt class=\"dl__dt\">username:</dt><dd class=\"dl__dd\">{username}</dd>\n"
    ));
    html.push_str(&format!(
        "<dt class=\"dl__dt\">password:</dt><dd class=\"dl__dd\">{password}</dd>\n"
    ));
    html.push_str("</dl>\n");

    for section in &display.sections {
        let section_title = html_escape(&section.title);
        html.push_str(&format!("<h3 class=\"item__title\">{section_title}</h3>\n"));
        html.push_str("<dl class=\"dl\">\n");
        for field in &section.fields {
            let name = html_escape(&field.name);
            let value = html_escape(&field.value);
            html.push_str(&format!(
                "<dt class=\"dl__dt\">{name}:</dt><dd class=\"dl__dd\">{value}</dd>\n"
            ));
        }
        html.push_str("</dl>\n");
    }

    html.push_str("</article>\n");
    html
}

/// Renderer for the report document and its stylesheet.
///
/// Holds the static document assets; one renderer serves every render of the
/// export loop. Rendering never fails: for a fixed set of options and items
/// the output is deterministic, except for the date line which is sampled at
/// render time.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    stylesheet: &'static str,
    loading_svg: &'static str,
    reload_script: &'static str,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer {
            stylesheet: STYLESHEET,
            loading_svg: LOADING_SVG,
            reload_script: RELOAD_SCRIPT,
        }
    }

    /// The stylesheet text, independent of how the document references it.
    pub fn stylesheet(&self) -> &'static str {
        self.stylesheet
    }

    /// Write the stylesheet to `w`, for the linked-CSS mode.
    pub fn write_stylesheet<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.stylesheet.as_bytes())
    }

    /// Render the full report document as a string.
    ///
    /// Every item in `items` produces exactly one article, in input order.
    /// Items without details render with empty credential values; that is
    /// the intermediate state of an export in progress.
    pub fn render_document(&self, options: &ViewOptions, items: &[Item]) -> String {
        let title = html_escape(options.title());

        let mut html = String::with_capacity(8 * 1024);
        html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");

        match options.css() {
            CssMode::None => {}
            CssMode::Inline => {
                html.push_str("<style>\n");
                html.push_str(self.stylesheet);
                html.push_str("\n</style>\n");
            }
            CssMode::Linked(href) => {
                let href = html_escape(href);
                html.push_str(&format!("<link rel=\"stylesheet\" href=\"{href}\">\n"));
            }
        }

        html.push_str(&format!("<title>{title}</title>\n"));
        html.push_str("</head>\n<body>\n");
        html.push_str("<main class=\"main\">\n");
        html.push_str("<header class=\"header\">\n");
        html.push_str(&format!("<h1 class=\"header__title\">{title}</h1>\n"));
        if options.show_date() {
            let date = html_escape(&format_timestamp());
            html.push_str(&format!("<p class=\"header__date\">{date}</p>\n"));
        }
        html.push_str("</header>\n");

        if options.loading() {
            html.push_str("<div class=\"loading\">\n<object class=\"loading__img\">");
            html.push_str(self.loading_svg);
            html.push_str("</object>\n<h2 class=\"loading__text\">retrieving passwords</h2>\n</div>\n");
        }

        for item in items {
            let display = DisplayItem::from_item(item);
            html.push_str(&render_item(&display, options.show_url()));
        }

        html.push_str("</main>\n");
        if options.loading() {
            html.push_str(self.reload_script);
        }
        html.push_str("</body>\n</html>");
        html
    }

    /// Render the document and write it to `w`.
    pub fn write_document<W: io::Write>(
        &self,
        w: &mut W,
        options: &ViewOptions,
        items: &[Item],
    ) -> io::Result<()> {
        w.write_all(self.render_document(options, items).as_bytes())
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
