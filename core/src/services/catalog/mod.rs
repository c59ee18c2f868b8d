//! Read-only access to the static data catalog.

use crate::domain::entities::data_item::catalog;
use crate::domain::value_objects::DataPage;

/// Serves the fixed data catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// All items, with their count
    pub fn list(&self) -> DataPage {
        DataPage::new(catalog().to_vec())
    }
}
