// extensions/tween.rs
//
// Tween system: time-bounded value animations.
//
// `Tween` is a bare value animation (from → to over a duration) usable on its
// own as a phase timer. `TweenState` binds tweens to node properties and
// applies them to the scene each step.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(halo_id, TweenTarget::Opacity, Tween::linear(1.0, 0.0, 2.0));
//   tweens.tick(dt, &mut scene);

use std::collections::BTreeMap;

use crate::api::types::NodeId;
use crate::core::scene::Scene;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// A single linear value animation. Durations are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl Tween {
    pub fn linear(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// 0 → 1 progress timer.
    pub fn timer(duration: f32) -> Self {
        Self::linear(0.0, 1.0, duration)
    }

    /// Normalized progress, `min(elapsed / duration, 1)`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        lerp(self.from, self.to, self.progress())
    }

    /// Advance by `dt` and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// Which node property a bound tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenTarget {
    Opacity,
}

/// Handle to a tween for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u32);

#[derive(Debug, Clone)]
struct Binding {
    node: NodeId,
    target: TweenTarget,
    tween: Tween,
    /// Not ticked yet. The first tick applies the start value only.
    fresh: bool,
}

/// Manages all active node tweens. There is no cancel: a tween, once added,
/// runs until it completes.
///
/// A tween added during a step starts advancing on the step after, in line
/// with phase timers that skip their entry step.
#[derive(Debug, Default)]
pub struct TweenState {
    bindings: BTreeMap<TweenId, Binding>,
    next_id: u32,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a tween to a node property. Returns a handle for queries.
    pub fn add(&mut self, node: NodeId, target: TweenTarget, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.bindings.insert(id, Binding { node, target, tween, fresh: true });
        id
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.bindings.get(&id).map(|b| &b.tween)
    }

    /// Whether the tween behind `id` is still running.
    pub fn is_active(&self, id: TweenId) -> bool {
        self.bindings.contains_key(&id)
    }

    /// Whether any tween is driving `node`.
    pub fn is_animating(&self, node: NodeId) -> bool {
        self.bindings.values().any(|b| b.node == node)
    }

    /// Advance all tweens and apply their values to the scene.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) -> usize {
        let mut completed = Vec::new();

        for (&id, binding) in self.bindings.iter_mut() {
            let value = if binding.fresh {
                binding.fresh = false;
                binding.tween.value()
            } else {
                binding.tween.advance(dt)
            };

            if let Some(node) = scene.get_mut(binding.node) {
                match binding.target {
                    TweenTarget::Opacity => node.opacity = value.clamp(0.0, 1.0),
                }
            }

            if binding.tween.is_complete() {
                completed.push(id);
            }
        }

        for id in &completed {
            self.bindings.remove(id);
        }
        completed.len()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::Node;

    #[test]
    fn progress_is_clamped() {
        let mut t = Tween::timer(2.0);
        t.advance(0.5);
        assert!((t.progress() - 0.25).abs() < 1e-6);
        t.advance(10.0);
        assert_eq!(t.progress(), 1.0);
        assert!(t.is_complete());
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let t = Tween::linear(1.0, 0.0, 0.0);
        assert!(t.is_complete());
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn lerp_midpoint() {
        assert!((lerp(3.0, 1.5, 0.5) - 2.25).abs() < 1e-6);
    }

    #[test]
    fn first_tick_applies_start_value() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Node::group(NodeId(1)).with_opacity(0.3));
        let tween = tweens.add(id, TweenTarget::Opacity, Tween::linear(1.0, 0.0, 1.0));

        tweens.tick(0.5, &mut scene);
        assert_eq!(scene.get(id).unwrap().opacity, 1.0);
        assert_eq!(tweens.get(tween).unwrap().elapsed, 0.0);
    }

    #[test]
    fn opacity_fades_and_tween_is_removed() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Node::group(NodeId(1)));

        tweens.add(id, TweenTarget::Opacity, Tween::linear(1.0, 0.0, 1.0));
        tweens.tick(0.5, &mut scene);

        tweens.tick(0.5, &mut scene);
        assert!((scene.get(id).unwrap().opacity - 0.5).abs() < 1e-4);
        assert!(tweens.is_animating(id));

        assert_eq!(tweens.tick(0.5, &mut scene), 1);
        assert_eq!(scene.get(id).unwrap().opacity, 0.0);
        assert!(tweens.is_empty());
    }

    #[test]
    fn overshooting_step_never_goes_negative() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Node::group(NodeId(1)));
        tweens.add(id, TweenTarget::Opacity, Tween::linear(1.0, 0.0, 0.1));

        tweens.tick(0.25, &mut scene);
        tweens.tick(0.25, &mut scene);
        assert_eq!(scene.get(id).unwrap().opacity, 0.0);
    }

    #[test]
    fn missing_node_still_completes() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = tweens.add(NodeId(42), TweenTarget::Opacity, Tween::linear(1.0, 0.0, 0.1));
        tweens.tick(0.1, &mut scene);
        assert!(tweens.is_active(id));
        tweens.tick(0.1, &mut scene);
        assert!(!tweens.is_active(id));
    }
}
