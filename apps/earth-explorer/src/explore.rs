//! The explore sequence: intro text fades, the camera makes one full turn
//! around the globe while zooming in, the halo fades, and finally the search
//! box is revealed.
//!
//! All phases run on the fixed-step clock. The step that enters a phase
//! contributes no elapsed time to it.

use std::f32::consts::TAU;

use glam::Vec3;
use orbit_engine::{lerp, EngineContext, HostEvent, NodeId, PerspectiveCamera, Tween, TweenId, TweenTarget};

use crate::config::ExplorerConfig;

/// Host event: slide the search box on screen.
pub const EVENT_REVEAL_SEARCH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    TextFading,
    CameraTurning,
    /// Runs alongside CameraTurning; never part of the main chain.
    HaloFading,
    SearchRevealing,
    Complete,
}

/// Nodes the sequence fades.
#[derive(Debug, Clone, Copy)]
pub struct ExploreTargets {
    pub intro: NodeId,
    pub halo: NodeId,
}

/// One revolution around the origin, radius going from `start_distance`
/// to `end_distance`.
#[derive(Debug, Clone)]
pub struct CameraTurn {
    timer: Tween,
    start_distance: f32,
    end_distance: f32,
    height: f32,
    started: bool,
}

impl CameraTurn {
    pub fn new(duration: f32, start_distance: f32, end_distance: f32, height: f32) -> Self {
        Self {
            timer: Tween::timer(duration),
            start_distance,
            end_distance,
            height,
            started: false,
        }
    }

    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    pub fn angle(&self) -> f32 {
        self.progress() * TAU
    }

    pub fn distance(&self) -> f32 {
        lerp(self.start_distance, self.end_distance, self.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.timer.is_complete()
    }

    /// Advance and pose the camera. The first call only poses.
    pub fn step(&mut self, dt: f32, camera: &mut PerspectiveCamera) -> f32 {
        if self.started {
            self.timer.advance(dt);
        } else {
            self.started = true;
        }
        camera.look_at(Vec3::ZERO);
        camera.set_orbit(self.angle(), self.distance(), self.height);
        self.progress()
    }
}

#[derive(Debug)]
pub struct ExploreSequence {
    phase: AnimationPhase,
    entered: bool,
    intro_fade_secs: f32,
    camera_turn_secs: f32,
    halo_fade_secs: f32,
    start_distance: f32,
    end_distance: f32,
    height: f32,
    delay: Tween,
    turn: Option<CameraTurn>,
    halo: Option<TweenId>,
    runs: u32,
}

impl ExploreSequence {
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            phase: AnimationPhase::Idle,
            entered: false,
            intro_fade_secs: config.intro_fade_secs,
            camera_turn_secs: config.camera_turn_secs,
            halo_fade_secs: config.halo_fade_secs,
            start_distance: config.camera_start_distance,
            end_distance: config.camera_end_distance,
            height: config.camera_height,
            delay: Tween::timer(config.intro_fade_secs),
            turn: None,
            halo: None,
            runs: 0,
        }
    }

    /// Phase of the main chain.
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// True between a request and the end of SearchRevealing, and for as
    /// long as the halo is still fading.
    pub fn in_flight(&self) -> bool {
        self.halo.is_some()
            || matches!(
                self.phase,
                AnimationPhase::TextFading | AnimationPhase::CameraTurning | AnimationPhase::SearchRevealing
            )
    }

    pub fn is_running(&self, phase: AnimationPhase) -> bool {
        match phase {
            AnimationPhase::HaloFading => self.halo.is_some(),
            other => self.phase == other,
        }
    }

    pub fn turn(&self) -> Option<&CameraTurn> {
        self.turn.as_ref()
    }

    /// Number of sequences started so far.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Start the sequence. Ignored while one is already in flight.
    /// Takes effect on the next [`update`](Self::update).
    pub fn request(&mut self) -> bool {
        if self.in_flight() {
            log::warn!("explore: already running ({:?}), request ignored", self.phase);
            return false;
        }
        self.phase = AnimationPhase::TextFading;
        self.entered = false;
        self.runs += 1;
        true
    }

    fn enter(&mut self, phase: AnimationPhase, ctx: &mut EngineContext, targets: &ExploreTargets) {
        self.phase = phase;
        self.entered = true;
        log::info!("explore: {:?}", phase);

        match phase {
            AnimationPhase::TextFading => {
                ctx.tweens.add(
                    targets.intro,
                    TweenTarget::Opacity,
                    Tween::linear(1.0, 0.0, self.intro_fade_secs),
                );
                self.delay = Tween::timer(self.intro_fade_secs);
            }
            AnimationPhase::CameraTurning => {
                self.halo = Some(ctx.tweens.add(
                    targets.halo,
                    TweenTarget::Opacity,
                    Tween::linear(1.0, 0.0, self.halo_fade_secs),
                ));
                let mut turn = CameraTurn::new(self.camera_turn_secs, self.start_distance, self.end_distance, self.height);
                turn.step(0.0, &mut ctx.camera);
                self.turn = Some(turn);
                ctx.camera_driven = true;
            }
            AnimationPhase::SearchRevealing => {
                ctx.camera_driven = false;
                ctx.emit_event(HostEvent::signal(EVENT_REVEAL_SEARCH));
            }
            AnimationPhase::Idle | AnimationPhase::HaloFading | AnimationPhase::Complete => {}
        }
    }

    /// Advance one fixed step.
    pub fn update(&mut self, dt: f32, ctx: &mut EngineContext, targets: &ExploreTargets) {
        if let Some(id) = self.halo {
            if !ctx.tweens.is_active(id) {
                self.halo = None;
                log::info!("explore: halo faded");
            }
        }

        if !self.entered {
            if self.phase == AnimationPhase::TextFading {
                self.enter(AnimationPhase::TextFading, ctx, targets);
            }
            return;
        }

        match self.phase {
            AnimationPhase::TextFading => {
                self.delay.advance(dt);
                if self.delay.is_complete() {
                    self.enter(AnimationPhase::CameraTurning, ctx, targets);
                }
            }
            AnimationPhase::CameraTurning => {
                let done = match self.turn.as_mut() {
                    Some(turn) => turn.step(dt, &mut ctx.camera) >= 1.0,
                    None => true,
                };
                if done {
                    self.enter(AnimationPhase::SearchRevealing, ctx, targets);
                }
            }
            AnimationPhase::SearchRevealing => {
                self.enter(AnimationPhase::Complete, ctx, targets);
            }
            AnimationPhase::Idle | AnimationPhase::HaloFading | AnimationPhase::Complete => {}
        }
    }
}
