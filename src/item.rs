//! Item schema for the JSON emitted by the 1Password CLI.
//!
//! `op list items` returns an array of items carrying overview data only;
//! `op get item <uuid>` returns the same item with the `details` block
//! populated. The serde defaults are deliberate: the CLI omits empty arrays
//! and the details block entirely, and an item without details must decode
//! (and render) cleanly.

use serde::{Deserialize, Serialize};

/// Template UUID of the login category. Only login items carry credentials
/// worth a detail fetch.
pub const TEMPLATE_UUID_LOGIN: &str = "001";

/// Template UUID of the secure note category.
pub const TEMPLATE_UUID_SECURE_NOTE: &str = "003";

/// A single 1Password item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable item identifier, used for the detail fetch.
    pub uuid: String,

    /// Category tag (see the `TEMPLATE_UUID_*` constants).
    #[serde(default)]
    pub template_uuid: String,

    /// Always present, even before the detail fetch.
    #[serde(default)]
    pub overview: ItemOverview,

    /// Present only after a successful `op get item` for this item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ItemDetails>,
}

impl Item {
    /// Whether this item belongs to the login category.
    pub fn is_login(&self) -> bool {
        self.template_uuid == TEMPLATE_UUID_LOGIN
    }
}

/// Overview data returned by the listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemOverview {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// Detail block returned by `op get item`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDetails {
    /// Top-level password. When non-empty it wins over any
    /// `password`-designated field.
    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub fields: Vec<ItemField>,

    #[serde(default)]
    pub sections: Vec<Section>,
}

impl ItemDetails {
    /// Resolve the username and password to display.
    ///
    /// Fields are scanned in order and the last occurrence of each
    /// designation wins; the top-level password then overrides the
    /// field-level one if non-empty.
    pub fn find_login(&self) -> (String, String) {
        let mut username = String::new();
        let mut password = String::new();
        for field in &self.fields {
            match field.designation.as_str() {
                "username" => username = field.value.clone(),
                "password" => password = field.value.clone(),
                _ => {}
            }
        }
        if !self.password.is_empty() {
            password = self.password.clone();
        }
        (username, password)
    }
}

/// A form field inside the detail block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemField {
    #[serde(default)]
    pub id: String,

    /// Semantic role of the field; `username` and `password` are the two
    /// designations the report cares about.
    #[serde(default)]
    pub designation: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub value: String,
}

/// A named section inside the detail block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub fields: Vec<SectionField>,
}

/// A field inside a section. The wire format abbreviates the keys to
/// `t` and `v`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionField {
    #[serde(rename = "t", default)]
    pub title: String,

    #[serde(rename = "v", default)]
    pub value: String,
}
