// ============================================================================
// Indexing Module
// Ring-style and bounds-checked lookups over slices
// ============================================================================

mod cyclic;
mod extremes;

pub use cyclic::{cyclic_index, element_at_cyclic_index, safe_index};
pub use extremes::{max_except_index, min_except_index, min_max};
