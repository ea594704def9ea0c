// ============================================================================
// Numeric Module
// Shared error taxonomy for every helper in the crate
// ============================================================================
//
// Design principles:
// - Input validation failures return Result (no panics)
// - Numeric ceilings wrap silently and identically in debug and release
// - Explicit checked_* variants exist where a caller needs Overflow reported

mod errors;

pub use errors::{NumericError, NumericResult};
