pub mod description;
pub mod totals;
