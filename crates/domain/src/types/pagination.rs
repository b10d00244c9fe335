//! Provider page envelope

use serde::{Deserialize, Serialize};

/// One page of a provider listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_size: u32,
    pub page_offset: u32,
    /// True when the provider reports more items beyond this page.
    pub has_next: bool,
}
