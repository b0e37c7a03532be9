// extensions/mod.rs
//
// Animation helpers. Node tweens live in EngineContext and are ticked
// once per fixed step by the runner.

pub mod tween;

pub use tween::{TweenState, Tween, TweenId, TweenTarget, lerp};
