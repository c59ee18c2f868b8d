//! Static data records served by the protected endpoint.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
}

impl DataItem {
    pub fn new(id: u32, name: &str, description: &str, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

static CATALOG: Lazy<Vec<DataItem>> = Lazy::new(|| {
    vec![
        DataItem::new(1, "Widget A", "High-performance widget", "widgets"),
        DataItem::new(2, "Gadget B", "Multi-purpose gadget", "gadgets"),
        DataItem::new(3, "Tool C", "Precision engineering tool", "tools"),
    ]
});

/// The fixed catalog, in id order
pub fn catalog() -> &'static [DataItem] {
    &CATALOG
}
