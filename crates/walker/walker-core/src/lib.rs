//! Walker Core (engine-agnostic)
//!
//! Moves an articulated two-legged figure along a spline path and keeps its legs in step with
//! how far it actually travels each frame.
//!
//! - `path`: control points -> curve (Catmull-Rom or uniform B-spline), position and tangent queries
//! - `driver`: per-frame update of [`GaitState`] and [`FigurePose`]
//! - `session`: owns one path + state and applies host commands
//! - `loader`: text/JSON control-point files

pub mod config;
pub mod driver;
pub mod error;
pub mod gait;
pub mod inputs;
pub mod loader;
pub mod path;
pub mod pose;
pub mod session;
pub mod vec3;

// Re-exports for consumers (adapters)
pub use config::{ControlConfig, GaitConfig, WalkerConfig};
pub use driver::{advance, advance_with};
pub use error::PathLoadError;
pub use gait::GaitState;
pub use inputs::SessionCommand;
pub use loader::{
    load_path_file, load_path_or_default, parse_control_points_text, parse_path_json, LoadedPath,
};
pub use path::{evaluate, tangent, BasisKind, ControlPath};
pub use pose::{FigurePose, Joint, LegPose};
pub use session::Session;
pub use vec3::Point3;
