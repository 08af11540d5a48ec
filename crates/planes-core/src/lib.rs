pub mod camera;
pub mod clock;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod image;
pub mod layout;
pub mod material;
pub mod noise;
pub mod post;
pub mod raycast;
pub mod registry;
pub mod scene;
pub mod scroll;
pub mod viewport;

pub static PLANE_WGSL: &str = include_str!("../shaders/plane.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use camera::*;
pub use clock::*;
pub use error::*;
pub use geometry::*;
pub use hover::*;
pub use image::*;
pub use layout::*;
pub use material::*;
pub use post::*;
pub use raycast::*;
pub use registry::*;
pub use scene::*;
pub use scroll::*;
pub use viewport::*;
