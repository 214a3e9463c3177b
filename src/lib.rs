pub mod codec;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

pub use domain::itemset::ItemSet;
pub use utils::error::{ItemSetError, Result};
