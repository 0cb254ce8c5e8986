use thiserror::Error;

/// Failures talking to the local key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(#[source] confy::ConfyError),
    #[error("failed to write `{key}` to local storage: {source}")]
    Write {
        key: String,
        #[source]
        source: confy::ConfyError,
    },
}
