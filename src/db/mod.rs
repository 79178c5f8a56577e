pub mod breaks;
pub mod convert;
pub mod employees;
pub mod ledger;
pub mod log;
pub mod migrate;
pub mod office_hours;
pub mod pool;
pub mod projects;
pub mod sessions;
