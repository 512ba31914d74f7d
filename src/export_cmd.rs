//! CLI command handler for the export.
//!
//! Drives the incremental loop: render an empty report, list the vault,
//! fetch details one login at a time re-rendering after each, then clear
//! the loading indicator and render the final document.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::item::Item;
use crate::report::{CssMode, HtmlRenderer, ViewOptions};
use crate::source::{ItemSource, OpCli};
use crate::{ExportError, ExportResult};

/// Run the export command.
pub fn run(
    output: PathBuf,
    css: PathBuf,
    title: String,
    no_date: bool,
    no_url: bool,
    inline_css: bool,
    no_reload: bool,
    op_command: String,
) -> ExportResult<()> {
    let source = OpCli::from_command(&op_command)?;
    let options = build_options(title, no_date, no_url, inline_css, no_reload, &css);
    export(&source, options, &output, &css)
}

/// Translate CLI toggles into render options.
///
/// The defaults mirror the report people usually want: date and URL lines
/// on, a linked stylesheet, and auto-reload while the export runs.
fn build_options(
    title: String,
    no_date: bool,
    no_url: bool,
    inline_css: bool,
    no_reload: bool,
    css: &Path,
) -> ViewOptions {
    let mut options = ViewOptions::new(title);
    if !no_date {
        options = options.with_date();
    }
    if !no_url {
        options = options.with_url();
    }
    options = if inline_css {
        options.with_inline_css()
    } else {
        options.with_linked_css(css.display().to_string())
    };
    if !no_reload {
        options = options.with_auto_reload();
    }
    options
}

/// Drive the export against an already-built source.
///
/// Factored out of [`run`] so tests can substitute a mock source. Fetch
/// failures are logged and skipped; listing or write failures abort.
pub fn export(
    source: &dyn ItemSource,
    mut options: ViewOptions,
    html_path: &Path,
    css_path: &Path,
) -> ExportResult<()> {
    let Some(version) = source.version() else {
        return Err(ExportError::Message(format!(
            "{:?} is not in the PATH",
            source.name()
        )));
    };
    debug!("{} version {}", source.name(), version);

    let renderer = HtmlRenderer::new();

    if let CssMode::Linked(_) = options.css() {
        let mut file = File::create(css_path).map_err(|e| {
            ExportError::Message(format!("failed to create {}: {e}", css_path.display()))
        })?;
        renderer.write_stylesheet(&mut file)?;
    }

    let mut items: Vec<Item> = Vec::new();
    write_report(&renderer, &options, &items, html_path)?;
    println!("open {} in your browser", file_uri(html_path));

    items = source.list_items()?;
    info!("listed {} item(s)", items.len());
    write_report(&renderer, &options, &items, html_path)?;

    let mut passwords = 0usize;
    for i in 0..items.len() {
        if !items[i].is_login() {
            continue;
        }
        let title = items[i].overview.title.clone();
        debug!("fetching details for {title:?}");
        match source.fetch_details(&mut items[i]) {
            Ok(()) => {
                passwords += 1;
                write_report(&renderer, &options, &items, html_path)?;
            }
            // The item stays in the report as a title/url-only entry.
            Err(e) => warn!("failed to get details for {title:?}: {e}"),
        }
    }

    options.mark_loading_complete();
    write_report(&renderer, &options, &items, html_path)?;

    println!(
        "wrote {} item(s) ({} password(s)) into {}",
        items.len(),
        passwords,
        html_path.display()
    );
    Ok(())
}

/// Re-create the report file and write the current document.
///
/// Re-creating instead of truncating an open handle keeps the write offset
/// at zero, so a shorter document never leaves stale bytes behind.
fn write_report(
    renderer: &HtmlRenderer,
    options: &ViewOptions,
    items: &[Item],
    path: &Path,
) -> ExportResult<()> {
    let mut file = File::create(path)
        .map_err(|e| ExportError::Message(format!("failed to create {}: {e}", path.display())))?;
    renderer.write_document(&mut file, options, items)?;
    Ok(())
}

/// Best-effort `file://` URI for the report path.
fn file_uri(path: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    format!("file://{}", absolute.display())
}
