pub mod camera;
pub mod clock;
pub mod constants;
pub mod frame;
pub mod lifecycle;
pub mod navigation;
pub mod particles;
pub mod pointer;
pub mod render;
pub mod section;
pub mod shading;

pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use frame::*;
pub use lifecycle::*;
pub use navigation::*;
pub use particles::*;
pub use pointer::*;
pub use render::*;
pub use section::*;
pub use shading::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
