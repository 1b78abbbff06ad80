pub mod formatters;
pub mod formulas;
pub mod helpers;

pub use formatters::{abbreviate_number, add_commas_to_number, percentage_formatter, round_to_two};
pub use formulas::{calculate_percentage, percentage_change};
pub use helpers::{contains_all_zeros, convert_px_to_number, generate_dropdown_values};
