pub mod break_record;
pub mod employee;
pub mod office_hours;
pub mod overtime_entry;
pub mod overtime_status;
pub mod overtime_type;
pub mod project;
pub mod session;
