pub mod camera;
pub mod config;
pub mod constants;
pub mod controls;
pub mod dispatch;
pub mod error;
pub mod geo;
pub mod marker;
pub mod mesh;
pub mod picker;
pub mod sample;
pub mod state;
pub mod texture;

pub use camera::*;
pub use config::*;
pub use controls::*;
pub use dispatch::*;
pub use error::GlobeError;
pub use geo::*;
pub use marker::*;
pub use picker::*;
pub use sample::*;
pub use state::*;

// Shaders bundled as string constants
pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub static ATMOSPHERE_WGSL: &str = include_str!("../shaders/atmosphere.wgsl");
pub static MARKER_WGSL: &str = include_str!("../shaders/marker.wgsl");
