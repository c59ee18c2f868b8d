//! Value objects returned by domain services.

pub mod access_token;
pub mod data_page;

pub use access_token::{AccessToken, TOKEN_TYPE_BEARER};
pub use data_page::DataPage;
