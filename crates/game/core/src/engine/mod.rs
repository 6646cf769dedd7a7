//! The per-character combat state machine.
//!
//! [`CombatMachine::advance`] is the single mutation entry point. Each call
//! runs the phases of one simulation step in a fixed order:
//!
//! 1. landing: a surface landing returns an unlocked character to idle
//! 2. intents: the [`Brain`] picks a state, facing and motion
//! 3. damage: at most one hostile overlap is resolved
//! 4. frames: the combo buffer is captured, then the frame clock advances,
//!    releasing invulnerability and completing sequences as frames pass
//! 5. presentation: sprite and hitbox for the resulting state and frame
//!
//! A step with zero elapsed time only runs the presentation phase.

mod brain;
mod errors;
mod outcome;
pub(crate) mod transition;

pub use brain::{Brain, DecideContext, Decision, EnemyBrain, PlayerBrain};
pub use errors::InvariantViolation;
pub use outcome::{
    HitboxCommand, Motion, Request, SpriteFrame, StepOutcome, Tint, Transition, TransitionCause,
};

use std::sync::Arc;

use crate::anim::CompletionPolicy;
use crate::combat::DamageResolver;
use crate::config::CombatConfig;
use crate::env::{BodyId, EmptyWorld, Overlap, WorldQuery};
use crate::error::CombatError;
use crate::geometry::{Facing, Vec2};
use crate::input::Intents;
use crate::profile::{CharacterProfile, InvulnerabilityRelease};
use crate::state::{CharacterRuntime, EnemyState, PlayerState, StateFlags, StateSet};

use transition::{enter_state, release_hit_reaction};

/// Inputs of one simulation step for one character.
#[derive(Clone, Copy)]
pub struct StepInput<'a> {
    /// Seconds since the previous step.
    pub elapsed: f32,
    pub intents: Intents,
    /// Colliders overlapping the character's body.
    pub overlaps: &'a [Overlap],
    /// The body touched down on a surface since the previous step.
    pub landed: bool,
    /// World position of the character's body.
    pub position: Vec2,
    pub world: &'a dyn WorldQuery,
}

impl<'a> StepInput<'a> {
    pub fn new(elapsed: f32) -> Self {
        Self {
            elapsed,
            intents: Intents::NONE,
            overlaps: &[],
            landed: false,
            position: Vec2::ZERO,
            world: &EmptyWorld,
        }
    }

    pub fn with_intents(mut self, intents: Intents) -> Self {
        self.intents = intents;
        self
    }

    pub fn with_overlaps(mut self, overlaps: &'a [Overlap]) -> Self {
        self.overlaps = overlaps;
        self
    }

    pub fn with_landed(mut self, landed: bool) -> Self {
        self.landed = landed;
        self
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_world(mut self, world: &'a dyn WorldQuery) -> Self {
        self.world = world;
        self
    }
}

impl std::fmt::Debug for StepInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepInput")
            .field("elapsed", &self.elapsed)
            .field("intents", &self.intents)
            .field("overlaps", &self.overlaps)
            .field("landed", &self.landed)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// State machine of one character instance.
pub struct CombatMachine<B: Brain> {
    profile: Arc<CharacterProfile<B::State>>,
    config: CombatConfig,
    brain: B,
    runtime: CharacterRuntime<B::State>,
}

pub type PlayerMachine = CombatMachine<PlayerBrain>;
pub type EnemyMachine = CombatMachine<EnemyBrain>;

impl PlayerMachine {
    pub fn player(
        profile: Arc<CharacterProfile<PlayerState>>,
        config: CombatConfig,
        body: BodyId,
    ) -> Self {
        Self::new(PlayerBrain, profile, config, body)
    }
}

impl EnemyMachine {
    pub fn enemy(
        profile: Arc<CharacterProfile<EnemyState>>,
        config: CombatConfig,
        body: BodyId,
        target: Option<BodyId>,
    ) -> Self {
        Self::new(EnemyBrain::new(target), profile, config, body)
    }
}

impl<B: Brain> CombatMachine<B> {
    /// Spawns a character in its idle state with full health.
    pub fn new(
        brain: B,
        profile: Arc<CharacterProfile<B::State>>,
        config: CombatConfig,
        body: BodyId,
    ) -> Self {
        let runtime = CharacterRuntime::spawn(body, profile.stats().max_health);
        Self {
            profile,
            config,
            brain,
            runtime,
        }
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.runtime.set_facing(facing);
        self
    }

    pub fn runtime(&self) -> &CharacterRuntime<B::State> {
        &self.runtime
    }

    pub fn profile(&self) -> &Arc<CharacterProfile<B::State>> {
        &self.profile
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn brain(&self) -> &B {
        &self.brain
    }

    pub fn brain_mut(&mut self) -> &mut B {
        &mut self.brain
    }

    pub fn body(&self) -> BodyId {
        self.runtime.body()
    }

    pub fn state(&self) -> B::State {
        self.runtime.state()
    }

    pub fn is_destroyed(&self) -> bool {
        self.runtime.is_destroyed()
    }

    /// Runs one simulation step.
    ///
    /// Destroyed characters are inert and return an empty outcome.
    pub fn advance(&mut self, step: &StepInput<'_>) -> StepOutcome<B::State> {
        let mut outcome = StepOutcome::new();
        if self.runtime.is_destroyed() {
            return outcome;
        }

        let elapsed = sanitize_elapsed(step.elapsed);
        if elapsed > 0.0 {
            self.simulate(step, elapsed, &mut outcome);
            if self.runtime.is_destroyed() {
                return outcome;
            }
        }

        self.present(&mut outcome);
        outcome
    }

    fn simulate(
        &mut self,
        step: &StepInput<'_>,
        elapsed: f32,
        outcome: &mut StepOutcome<B::State>,
    ) {
        if step.landed && !self.runtime.flags().is_locked() {
            enter_state(
                &mut self.runtime,
                &self.profile,
                <B::State as StateSet>::IDLE,
                TransitionCause::Landed,
                false,
                outcome,
            );
        }

        let decision = self.brain.decide(DecideContext {
            runtime: &mut self.runtime,
            step,
            profile: &self.profile,
            config: &self.config,
            elapsed,
        });
        if let Some(facing) = decision.facing {
            self.runtime.set_facing(facing);
        }
        if let Some(state) = decision.state {
            enter_state(
                &mut self.runtime,
                &self.profile,
                state,
                TransitionCause::Intent,
                false,
                outcome,
            );
        }
        outcome.motion = decision.motion;

        let hit = DamageResolver::resolve(
            &mut self.runtime,
            &self.profile,
            step.position,
            step.overlaps,
            outcome,
        );
        if hit.is_some() {
            outcome.motion.velocity_x = Some(0.0);
        }
        outcome.hit = hit;

        if step.intents.attack
            && !decision.consumed_attack
            && self.runtime.is_attacking()
            && !self.runtime.buffered_attack()
        {
            self.runtime.buffer_attack();
            tracing::debug!(
                profile = self.profile.name(),
                state = %self.runtime.state(),
                "combo input buffered"
            );
        }

        self.advance_frames(elapsed, outcome);
    }

    /// Consumes every whole frame the accumulated time covers in one pass,
    /// so the cost of a step does not grow with its elapsed time.
    fn advance_frames(&mut self, elapsed: f32, outcome: &mut StepOutcome<B::State>) {
        let state = self.runtime.state();
        let Some(track) = self.profile.track(state) else {
            return;
        };
        self.runtime.clock_mut().accumulate(elapsed);
        let frames = self.runtime.clock_mut().take_frames(track.seconds_per_frame());
        if frames == 0 {
            return;
        }

        let start = self.runtime.frame_index();
        let reached = start.saturating_add(frames);
        if let InvulnerabilityRelease::AfterFrames(release_at) = self.profile.damage().release {
            if start < release_at
                && release_at <= reached
                && state.flags().contains(StateFlags::HIT_REACTION)
                && self.runtime.is_invulnerable()
            {
                release_hit_reaction(&mut self.runtime, outcome);
            }
        }

        let len = track.len();
        let last = track.last_index();
        if reached < len {
            self.runtime.clock_mut().set_index(reached);
            return;
        }
        match track.policy() {
            CompletionPolicy::Looping => self.runtime.clock_mut().set_index(reached % len),
            CompletionPolicy::HoldLastFrame => self.runtime.clock_mut().set_index(last),
            CompletionPolicy::Sequence => {
                if !self.complete(state, outcome) {
                    self.runtime.clock_mut().set_index(last);
                }
            }
        }
    }

    /// Terminal transition of a finished sequence. Returns false if the
    /// character stayed in `state`.
    fn complete(&mut self, state: B::State, outcome: &mut StepOutcome<B::State>) -> bool {
        if state.flags().contains(StateFlags::DEFEAT) {
            self.runtime.destroy();
            outcome.push_request(Request::Destroy);
            tracing::info!(
                profile = self.profile.name(),
                body = %self.runtime.body(),
                "defeat sequence finished, destroying character"
            );
            return true;
        }

        let transitions = self.profile.transitions();
        let (next, cause) = match transitions.combo_from(state) {
            Some(combo) if self.runtime.buffered_attack() => (combo, TransitionCause::Combo),
            _ => (
                transitions.completion_target(state),
                TransitionCause::Completed,
            ),
        };
        enter_state(
            &mut self.runtime,
            &self.profile,
            next,
            cause,
            true,
            outcome,
        )
    }

    fn present(&mut self, outcome: &mut StepOutcome<B::State>) {
        let state = self.runtime.state();
        let facing = self.runtime.facing();
        let Some(track) = self.profile.track(state) else {
            let violation = InvariantViolation::UntrackedState {
                state: state.to_string(),
            };
            tracing::warn!(
                code = violation.error_code(),
                severity = violation.severity().as_str(),
                %violation,
                "nothing to present"
            );
            return;
        };

        let mut index = self.runtime.frame_index();
        if index >= track.len() {
            let violation = InvariantViolation::FrameIndexOutOfBounds {
                state: state.to_string(),
                index,
                len: track.len(),
            };
            tracing::warn!(
                code = violation.error_code(),
                severity = violation.severity().as_str(),
                %violation,
                "clamping frame index"
            );
            index = track.last_index();
            self.runtime.clock_mut().set_index(index);
        }

        outcome.sprite = track.frame(index).map(|sprite| SpriteFrame {
            state,
            frame: index,
            sprite: Arc::clone(sprite),
            facing,
        });
        outcome.hitbox = match self.profile.hitboxes().lookup(state, index, facing) {
            Some(hitbox) => HitboxCommand::Armed(hitbox),
            None => HitboxCommand::Disarmed,
        };
    }
}

fn sanitize_elapsed(elapsed: f32) -> f32 {
    if elapsed.is_finite() && elapsed >= 0.0 {
        return elapsed;
    }
    let violation = InvariantViolation::InvalidElapsed { elapsed };
    tracing::warn!(
        code = violation.error_code(),
        severity = violation.severity().as_str(),
        %violation,
        "treating step as zero-length"
    );
    0.0
}
