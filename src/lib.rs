pub mod error;
pub mod features;
pub mod generators;
pub mod geo;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;

pub use error::{Result, TactimeshError};
pub use features::TactileMapData;
pub use generators::SceneParams;
pub use scene::{assemble_scene, Scene};
