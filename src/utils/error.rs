use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemSetError {
    #[error("cannot extract the head of an empty item set")]
    EmptyItemSet,

    #[error("truncated input while decoding {context}")]
    Truncated { context: String },

    #[error("item {index} is not valid UTF-8")]
    InvalidItemBytes { index: usize },

    #[error("{0} trailing bytes after a complete item set")]
    TrailingBytes(usize),

    #[error("{what} of {len} does not fit the wire format")]
    Oversize { what: &'static str, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ItemSetError>;
