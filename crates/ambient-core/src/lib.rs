pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod motion;
pub mod paint;
pub mod particle;
pub mod render;
pub mod scheduler;
pub mod surface;
pub mod testing;
pub mod viewport;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use motion::Heading;
pub use paint::*;
pub use particle::*;
pub use render::Layers;
pub use scheduler::*;
pub use surface::*;
pub use viewport::*;
