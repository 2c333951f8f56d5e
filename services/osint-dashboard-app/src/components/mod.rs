//! UI components

pub mod evaluation_panel;
pub mod indicator_detail;
pub mod indicator_list;
