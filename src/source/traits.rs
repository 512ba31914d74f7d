//! Item source trait for the unified source abstraction.

use crate::ExportResult;
use crate::item::Item;

/// A source of vault items.
///
/// The export loop only talks to this trait: the real implementation shells
/// out to the 1Password CLI, and tests substitute a configurable mock.
pub trait ItemSource: Send + Sync {
    /// Returns the source name (e.g. "op", "mock").
    fn name(&self) -> &str;

    /// Returns the source version, if the source is reachable.
    ///
    /// `None` means the backing command could not be run; the export loop
    /// treats that as "not installed" and aborts before touching any files.
    fn version(&self) -> Option<String>;

    /// List every item in the vault, without detail blocks.
    fn list_items(&self) -> ExportResult<Vec<Item>>;

    /// Fetch the detail block for one item and store it on the item.
    ///
    /// A failure leaves the item untouched; the caller decides whether to
    /// keep going.
    fn fetch_details(&self, item: &mut Item) -> ExportResult<()>;
}
