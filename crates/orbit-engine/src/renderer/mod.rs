pub mod camera;

pub use camera::PerspectiveCamera;
