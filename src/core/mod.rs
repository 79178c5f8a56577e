pub mod admission;
pub mod calculator;
pub mod config;
pub mod ledger;
pub mod log;
pub mod machine;
pub mod office_hours;
pub mod tracker;
