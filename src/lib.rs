//! Native client for the symbol classification service.
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Base URL and timeouts from the environment |
//! | [`client`] | `reqwest` calls to `/classify`, `/save`, `/retrain`, `/version` |
//! | [`session`] | Pad controller: surface, pad state, and client together |
//! | [`script`] | JSON stroke scripts replayed onto a surface |

pub mod client;
pub mod config;
pub mod script;
pub mod session;

#[cfg(test)]
pub mod test_helpers;
