//! Listing of data items with a total count.

use serde::{Deserialize, Serialize};

use crate::domain::entities::DataItem;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPage {
    pub items: Vec<DataItem>,
    pub total: usize,
}

impl DataPage {
    pub fn new(items: Vec<DataItem>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
