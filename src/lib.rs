//! Tomodachi feed
//!
//! Ranking core and terminal client for a community post feed: scoring
//! functions, a stable sort orchestrator, mood filtering, session-scoped
//! feed state and a virtualized render window.
//!
//! Pure core (`model`, `ranking`, `view_state`, `state`) / impure shell
//! (`source`, `view`, `logging`, `config` loading).

pub mod config;
pub mod logging;
pub mod model;
pub mod ranking;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;
