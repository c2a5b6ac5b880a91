//! Network access to the classification service.

pub mod api;
pub mod requests;
