pub mod controls;
pub mod dashboard;
