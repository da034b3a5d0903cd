//! UI state primitives shared by the engine and the renderer.
//!
//! Nothing here draws or performs IO; these are the plain-data pieces
//! of UI state the engine mutates and the TUI reads.

mod effects;
mod input;
mod options;

pub use effects::{EffectKind, EffectTimer, UiEffect};
pub use input::{DraftInput, InputMode};
pub use options::UiOptions;
