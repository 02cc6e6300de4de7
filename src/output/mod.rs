//! Terminal output formatting

pub mod art;
pub mod display;
pub mod formatters;

pub use display::print_simulation_report;
