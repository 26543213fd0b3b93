pub mod commentary;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod light;
pub mod particles;
pub mod region;
pub mod resolver;
pub mod scene;
pub mod sprites;
pub static GLOW_WGSL: &str = include_str!("../shaders/glow.wgsl");

pub use commentary::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use light::*;
pub use particles::*;
pub use region::*;
pub use resolver::*;
pub use scene::*;
pub use sprites::*;
