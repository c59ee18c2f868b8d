//! Domain entities representing core business objects.

pub mod data_item;
pub mod token;

// Re-export commonly used types
pub use data_item::DataItem;
pub use token::Claims;
