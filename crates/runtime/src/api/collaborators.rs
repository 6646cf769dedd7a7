//! Collaborators the arena drives each step.
//!
//! Physics, input polling, rendering and object cleanup live outside the
//! combat rules. Runtime users plug in implementations backed by a real
//! engine, a headless sandbox, or scripted test fixtures.
use brawl_core::{
    BodyId, ColliderId, HitboxCommand, Motion, Overlap, RawInput, StateSet, StepOutcome, Tint,
    Vec2, WorldQuery,
};

/// Physics world the characters live in.
pub trait PhysicsBackend: WorldQuery {
    /// Colliders overlapping `body` right now.
    fn overlaps(&self, body: BodyId) -> Vec<Overlap>;

    /// Returns true once per landing of `body` on a surface.
    fn take_landed(&mut self, body: BodyId) -> bool;

    fn apply_motion(&mut self, body: BodyId, motion: Motion);

    /// Enables or disables the melee collider owned by `body`.
    fn set_hitbox(&mut self, body: BodyId, command: HitboxCommand);

    fn deactivate_collider(&mut self, collider: ColliderId);
}

/// Raw input for the player, advanced once per step.
pub trait InputSource: RawInput {
    /// Called before the arena samples the source for a new step.
    fn begin_step(&mut self) {}
}

/// Renderer-facing sink for step results.
pub trait Presenter {
    fn present<S: StateSet>(&mut self, body: BodyId, outcome: &StepOutcome<S>);

    fn spawn_hit_effect(&mut self, position: Vec2) {
        let _ = position;
    }

    fn tint(&mut self, body: BodyId, tint: Tint) {
        let _ = (body, tint);
    }
}

/// Removes characters whose defeat sequence finished.
pub trait Lifecycle {
    fn destroy(&mut self, body: BodyId);
}

/// Presenter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present<S: StateSet>(&mut self, _body: BodyId, _outcome: &StepOutcome<S>) {}
}
