//! Fixed-capacity request batching.
//!
//! Bulk-lookup endpoints of the Spotify Web API accept a bounded number of ids
//! per call (100 for `/audio-features`). [`partition`] splits an ordered id
//! collection into consecutive chunks that respect such a cap.

use std::fmt;

/// Default number of ids per `/audio-features` request, the documented API cap.
pub const AUDIO_FEATURES_BATCH_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The maximum batch size was below one.
    InvalidArgument(String),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for BatchError {}

/// Splits `items` into ordered partitions of at most `max_batch_size` elements.
///
/// Partition `k` holds the items at positions `[k * M, min((k + 1) * M, N))`,
/// so concatenating the result reproduces `items` and exactly `ceil(N / M)`
/// partitions are returned. An empty input yields no partitions.
///
/// # Errors
///
/// Returns [`BatchError::InvalidArgument`] when `max_batch_size` is zero,
/// independent of the input length.
///
/// # Example
///
/// ```
/// let ids: Vec<String> = (0..333).map(|i| i.to_string()).collect();
/// let parts = partition(&ids, 100)?;
/// assert_eq!(parts.len(), 4);
/// ```
pub fn partition<T: Clone>(items: &[T], max_batch_size: usize) -> Result<Vec<Vec<T>>, BatchError> {
    validate_batch_size(max_batch_size)?;
    Ok(items.chunks(max_batch_size).map(<[T]>::to_vec).collect())
}

/// Rejects a maximum batch size below one.
pub fn validate_batch_size(max_batch_size: usize) -> Result<(), BatchError> {
    if max_batch_size < 1 {
        return Err(BatchError::InvalidArgument(format!(
            "max batch size must be at least 1, got {}",
            max_batch_size
        )));
    }
    Ok(())
}
