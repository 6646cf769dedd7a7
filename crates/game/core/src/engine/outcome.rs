//! What a single step hands back to the collaborators.

use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::combat::Hit;
use crate::config::CombatConfig;
use crate::env::ColliderId;
use crate::error::CombatError;
use crate::geometry::{Facing, Vec2};
use crate::hitbox::Hitbox;
use crate::state::StateSet;

use super::errors::InvariantViolation;

/// Velocity overrides for the physics collaborator.
///
/// `None` leaves the corresponding component to physics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    pub velocity_x: Option<f32>,
    /// Vertical velocity to set, used for jump impulses.
    pub velocity_y: Option<f32>,
}

impl Motion {
    pub const NONE: Self = Self {
        velocity_x: None,
        velocity_y: None,
    };

    /// Both components pinned to zero.
    pub const STOP: Self = Self {
        velocity_x: Some(0.0),
        velocity_y: Some(0.0),
    };

    pub fn is_none(&self) -> bool {
        self.velocity_x.is_none() && self.velocity_y.is_none()
    }
}

/// Color override for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Tint {
    /// Flash shown while a hit is being absorbed.
    Hit,
    Normal,
}

/// Side effects the core asks its collaborators to carry out, in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Request {
    /// Disable an attack collider that just landed so it cannot hit twice.
    DeactivateCollider(ColliderId),
    /// Spawn the cosmetic hit effect at a world position.
    SpawnHitEffect { position: Vec2 },
    Tint(Tint),
    /// Remove the character from the world.
    Destroy,
}

/// Sprite the renderer should display this step.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteFrame<S> {
    pub state: S,
    pub frame: usize,
    pub sprite: Arc<str>,
    pub facing: Facing,
}

/// Melee collider instruction, recomputed every step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HitboxCommand {
    /// Enable the collider at this placement, already mirrored for facing.
    Armed(Hitbox),
    #[default]
    Disarmed,
}

impl HitboxCommand {
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed(_))
    }

    pub fn placement(&self) -> Option<Hitbox> {
        match self {
            Self::Armed(hitbox) => Some(*hitbox),
            Self::Disarmed => None,
        }
    }
}

/// Why a state change happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TransitionCause {
    Intent,
    Landed,
    Damaged,
    Defeated,
    /// A sequence reached its end without a buffered combo.
    Completed,
    Combo,
}

/// A recorded state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S> {
    pub from: S,
    pub to: S,
    pub cause: TransitionCause,
}

type Requests = ArrayVec<Request, { CombatConfig::MAX_REQUESTS_PER_STEP }>;
type Transitions<S> = ArrayVec<Transition<S>, { CombatConfig::MAX_TRANSITIONS_PER_STEP }>;

/// Everything one call to `advance` produced.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome<S> {
    /// `None` once the character has been destroyed.
    pub sprite: Option<SpriteFrame<S>>,
    pub hitbox: HitboxCommand,
    pub motion: Motion,
    pub requests: Requests,
    pub transitions: Transitions<S>,
    /// Hit absorbed this step, if any.
    pub hit: Option<Hit>,
}

impl<S: StateSet> StepOutcome<S> {
    pub fn new() -> Self {
        Self {
            sprite: None,
            hitbox: HitboxCommand::Disarmed,
            motion: Motion::NONE,
            requests: ArrayVec::new(),
            transitions: ArrayVec::new(),
            hit: None,
        }
    }

    /// Returns true if the machine entered `state` during this step.
    pub fn entered(&self, state: S) -> bool {
        self.transitions.iter().any(|t| t.to == state)
    }

    pub fn has_request(&self, request: &Request) -> bool {
        self.requests.contains(request)
    }

    pub fn is_destroyed(&self) -> bool {
        self.has_request(&Request::Destroy)
    }

    pub(crate) fn push_request(&mut self, request: Request) {
        if self.requests.try_push(request).is_err() {
            let violation = InvariantViolation::OutcomeOverflow { what: "request" };
            tracing::warn!(
                code = violation.error_code(),
                severity = violation.severity().as_str(),
                %violation,
                ?request,
                "dropping side-effect request"
            );
        }
    }

    pub(crate) fn push_transition(&mut self, transition: Transition<S>) {
        if self.transitions.try_push(transition).is_err() {
            let violation = InvariantViolation::OutcomeOverflow { what: "transition" };
            tracing::warn!(
                code = violation.error_code(),
                severity = violation.severity().as_str(),
                %violation,
                ?transition,
                "dropping transition record"
            );
        }
    }
}

impl<S: StateSet> Default for StepOutcome<S> {
    fn default() -> Self {
        Self::new()
    }
}
