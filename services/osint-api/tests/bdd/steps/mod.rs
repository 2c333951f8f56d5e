//! BDD step definitions for the indicator API

pub mod evaluation_steps;
