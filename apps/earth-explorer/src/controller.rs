use std::f64::consts::TAU;

use glam::Vec3;
use orbit_engine::{EngineContext, NodeId};

use crate::config::ExplorerConfig;
use crate::explore::{ExploreSequence, ExploreTargets};

/// The sun's circular orbit around the globe.
///
/// Angles accumulate in `f64` so a 0.001 rad step still registers after
/// days of uptime.
#[derive(Debug, Clone)]
pub struct DayNightCycle {
    pub angle: f64,
    pub step: f64,
    pub radius: f32,
    pub height: f32,
}

impl DayNightCycle {
    pub fn new(step: f32, radius: f32, height: f32) -> Self {
        Self { angle: 0.0, step: step as f64, radius, height }
    }

    /// One step forward. Returns the new sun position.
    pub fn advance(&mut self) -> Vec3 {
        self.angle += self.step;
        self.sun_position()
    }

    pub fn sun_position(&self) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        Vec3::new(cos as f32 * self.radius, self.height, sin as f32 * self.radius)
    }
}

/// Whether the user is dragging the orbit controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionState {
    interacting: bool,
}

impl InteractionState {
    pub fn begin(&mut self) {
        self.interacting = true;
    }

    pub fn end(&mut self) {
        self.interacting = false;
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }
}

/// Auto-rotation of the globe about its axis.
#[derive(Debug, Clone)]
pub struct GlobeSpin {
    pub angle: f64,
    pub step: f64,
}

impl GlobeSpin {
    pub fn new(step: f32) -> Self {
        Self { angle: 0.0, step: step as f64 }
    }

    /// Spins only while the user is not interacting. No easing either way.
    pub fn advance(&mut self, interaction: &InteractionState) -> f64 {
        if !interaction.is_interacting() {
            self.angle += self.step;
        }
        self.angle
    }

    /// Node rotation for the current angle, wrapped to one turn.
    pub fn rotation(&self) -> f32 {
        self.angle.rem_euclid(TAU) as f32
    }
}

/// Everything that changes over time in the scene.
#[derive(Debug)]
pub struct SceneController {
    pub day_night: DayNightCycle,
    pub spin: GlobeSpin,
    pub interaction: InteractionState,
    pub explore: ExploreSequence,
}

impl SceneController {
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            day_night: DayNightCycle::new(config.sun_step, config.sun_radius, config.sun_height),
            spin: GlobeSpin::new(config.spin_step),
            interaction: InteractionState::default(),
            explore: ExploreSequence::new(config),
        }
    }

    /// One fixed step: day-night, then globe spin, then the explore sequence.
    pub fn step(&mut self, dt: f32, ctx: &mut EngineContext, globe: NodeId, targets: &ExploreTargets) {
        ctx.sun.position = self.day_night.advance();

        self.spin.advance(&self.interaction);
        if let Some(node) = ctx.scene.get_mut(globe) {
            node.rotation.y = self.spin.rotation();
        }

        self.explore.update(dt, ctx, targets);
    }
}
