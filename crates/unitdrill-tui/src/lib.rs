//! unitdrill-tui — Terminal surface and interactive views.
//!
//! Views draw on anything implementing [`Surface`]. The crossterm backend
//! drives a real terminal; [`scripted::ScriptedSurface`] replays a fixed key
//! script into an in-memory grid for tests.

pub mod crossterm_surface;
pub mod scripted;
pub mod surface;
pub mod views;

pub use crossterm_surface::{CrosstermSurface, TerminalGuard};
pub use surface::{Color, Key, Style, Surface};
pub use views::{run_app, AppOptions, HangmanSummary, RunSummary, View};
