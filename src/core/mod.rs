pub mod transcode;

pub use crate::domain::itemset::ItemSet;
pub use crate::utils::error::Result;
