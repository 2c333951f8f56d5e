//! BDD step definitions for the dashboard service

pub mod event_steps;
pub mod page_steps;
