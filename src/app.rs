//! Application module: the controller that ties playback, progress, accounts
//! and the shell together.
//!
//! `App` lives in `app::model`; the typed event dispatch from UI elements to
//! handlers lives in `app::dispatch`.

mod dispatch;
mod model;

pub use dispatch::*;
pub use model::*;
