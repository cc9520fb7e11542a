//! Input contracts for a [`crate::Session`].
//!
//! Hosts translate key presses (or UI, or scripted input) into these commands and pass
//! them to `Session::apply` before ticking.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionCommand {
    /// Raise the overall traversal speed by one step.
    SpeedUp,
    /// Lower the overall traversal speed by one step, not below the floor.
    SlowDown,
    CadenceUp,
    CadenceDown,
    SetOverallSpeed { value: f32 },
    SetLegCadence { value: f32 },
    /// Restart at the beginning of the path with the leg cycle at phase 0.
    Reset,
}
