// ============================================================================
// Equations Module
// Closed-form polynomial solvers
// ============================================================================

mod quadratic;

pub use quadratic::{discriminant, solve_quadratic, QuadraticRoots};
