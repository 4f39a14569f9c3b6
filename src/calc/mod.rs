//! The calculation core: operator evaluation, numeric display formatting,
//! and the append-only history of completed calculations.

pub mod eval;
pub mod format;
pub mod history;

pub use eval::Op;
