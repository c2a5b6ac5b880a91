//! Page components.

pub mod canvas_host;
pub mod help_modal;
pub mod result_panel;
pub mod status_bar;
pub mod toolbar;
