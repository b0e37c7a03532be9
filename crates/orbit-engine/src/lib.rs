pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, EngineContext};
pub use api::types::{NodeId, HostEvent};
pub use core::rng::Rng;
pub use core::scene::{Scene, Node, NodeKind, Geometry, Material, MaterialKind};
pub use core::time::FixedTimestep;
pub use renderer::camera::PerspectiveCamera;
pub use systems::lighting::DirectionalLight;
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{AssetManifest, ModelDescriptor};
pub use bridge::protocol::{ProtocolLayout, FrameWriter};

// Extensions
pub use extensions::{lerp, TweenState, Tween, TweenId, TweenTarget};
