use crate::core::scene::Scene;
use crate::api::types::{NodeId, HostEvent};
use crate::extensions::tween::TweenState;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::lighting::DirectionalLight;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of scene nodes published per frame (default: 64).
    pub max_nodes: usize,
    /// Maximum number of host events per frame (default: 32).
    pub max_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_nodes: 64,
            max_events: 32,
        }
    }
}

/// The core contract every app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Build the scene description and initial camera/light state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step. Advance animations, react to input.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to App::init and App::update.
///
/// This is the single owner of everything that changes per frame; the
/// runner constructs it at startup and drops it with the page.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub sun: DirectionalLight,
    pub tweens: TweenState,
    pub events: Vec<HostEvent>,
    /// True while the app (not the host's orbit controls) owns the camera pose.
    pub camera_driven: bool,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::default(),
            sun: DirectionalLight::default(),
            tweens: TweenState::new(),
            events: Vec::new(),
            camera_driven: false,
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an event to be forwarded to the host.
    pub fn emit_event(&mut self, event: HostEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Advance node tweens by one step. Events are left to the app.
    pub fn tick_tweens(&mut self, dt: f32) {
        self.tweens.tick(dt, &mut self.scene);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::Node;
    use crate::extensions::tween::{Tween, TweenTarget};

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(HostEvent::signal(3.0));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn finished_tween_emits_no_host_event() {
        let mut ctx = EngineContext::new();
        let id = ctx.next_id();
        ctx.scene.spawn(Node::group(id));
        ctx.tweens.add(id, TweenTarget::Opacity, Tween::linear(1.0, 0.0, 0.25));

        for _ in 0..3 {
            ctx.tick_tweens(0.25);
        }
        assert!(ctx.tweens.is_empty());
        assert_eq!(ctx.scene.get(id).unwrap().opacity, 0.0);
        assert!(ctx.events.is_empty());
    }
}
