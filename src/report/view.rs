//! Render options and the display projection of items.
//!
//! `ViewOptions` is built once at startup and handed to every render call;
//! the loading flag is the only thing that changes afterwards. `DisplayItem`
//! is the flattened, presentation-ready form of an item, recomputed from
//! scratch on every render and never stored.

use crate::item::{Item, Section};

/// How the stylesheet reaches the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CssMode {
    /// No stylesheet reference at all.
    #[default]
    None,
    /// Embed the stylesheet text in a `<style>` block.
    Inline,
    /// Reference an external stylesheet by href.
    Linked(String),
}

/// Rendering options for the report document.
///
/// Seeded with a title and every toggle off, then shaped with the `with_*`
/// setters. The setters touch disjoint fields, except the two CSS setters
/// which both assign the CSS mode: the last one applied wins.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    title: String,
    show_date: bool,
    show_url: bool,
    css: CssMode,
    loading: bool,
}

impl ViewOptions {
    /// Create options with the given title and every toggle off.
    pub fn new(title: impl Into<String>) -> Self {
        ViewOptions {
            title: title.into(),
            show_date: false,
            show_url: false,
            css: CssMode::None,
            loading: false,
        }
    }

    /// Show the export date in the report header. The timestamp is taken
    /// at render time, so an auto-reloading report tracks the latest render.
    pub fn with_date(mut self) -> Self {
        self.show_date = true;
        self
    }

    /// Show each item's URL line.
    pub fn with_url(mut self) -> Self {
        self.show_url = true;
        self
    }

    /// Embed the stylesheet into the document. The last CSS setter wins.
    pub fn with_inline_css(mut self) -> Self {
        self.css = CssMode::Inline;
        self
    }

    /// Reference an external stylesheet. The last CSS setter wins.
    pub fn with_linked_css(mut self, href: impl Into<String>) -> Self {
        self.css = CssMode::Linked(href.into());
        self
    }

    /// Start in the loading state: the document carries an animated
    /// indicator and a reload script until [`Self::mark_loading_complete`]
    /// is called.
    pub fn with_auto_reload(mut self) -> Self {
        self.loading = true;
        self
    }

    /// Leave the loading state. Once cleared the indicator never comes
    /// back; calling this again (or without auto-reload) is a no-op.
    pub fn mark_loading_complete(&mut self) {
        self.loading = false;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn show_date(&self) -> bool {
        self.show_date
    }

    pub fn show_url(&self) -> bool {
        self.show_url
    }

    pub fn css(&self) -> &CssMode {
        &self.css
    }

    pub fn loading(&self) -> bool {
        self.loading
    }
}

/// Presentation-ready projection of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub url: String,
    pub username: String,
    pub password: String,
    pub sections: Vec<DisplaySection>,
}

/// A named section of extra fields under an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySection {
    pub title: String,
    pub fields: Vec<DisplayField>,
}

/// One `name: value` line inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub name: String,
    pub value: String,
}

impl DisplayItem {
    /// Flatten an item for display.
    ///
    /// An item without details gets empty credentials and no sections;
    /// that is the normal state before its detail fetch completes, not an
    /// error.
    pub fn from_item(item: &Item) -> Self {
        let mut display = DisplayItem {
            title: item.overview.title.clone(),
            url: item.overview.url.clone(),
            username: String::new(),
            password: String::new(),
            sections: Vec::new(),
        };

        if let Some(details) = &item.details {
            let (username, password) = details.find_login();
            display.username = username;
            display.password = password;
            display.sections = details
                .sections
                .iter()
                .map(DisplaySection::from_section)
                .collect();
        }

        display
    }
}

impl DisplaySection {
    fn from_section(section: &Section) -> Self {
        DisplaySection {
            title: section.title.clone(),
            fields: section
                .fields
                .iter()
                .map(|f| DisplayField {
                    name: f.title.clone(),
                    value: f.value.clone(),
                })
                .collect(),
        }
    }
}
