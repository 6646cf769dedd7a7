//! Per-kind intent resolution.
//!
//! A [`Brain`] turns one step's inputs into the state the character wants to
//! be in, its facing and its velocity overrides. The machine applies the
//! decision before damage is resolved, so a hit in the same step still wins.

use crate::config::CombatConfig;
use crate::env::{BodyId, touching_surface};
use crate::geometry::Facing;
use crate::profile::CharacterProfile;
use crate::state::{CharacterRuntime, EnemyState, PlayerState, StateFlags, StateSet};

use super::StepInput;
use super::outcome::Motion;

/// Everything a brain may read, plus the player's dash window.
pub struct DecideContext<'a, S: StateSet> {
    pub runtime: &'a mut CharacterRuntime<S>,
    pub step: &'a StepInput<'a>,
    pub profile: &'a CharacterProfile<S>,
    pub config: &'a CombatConfig,
    /// Sanitized step duration in seconds.
    pub elapsed: f32,
}

/// What a brain wants to happen this step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision<S> {
    /// Requested state. Requesting the current state is a no-op.
    pub state: Option<S>,
    pub facing: Option<Facing>,
    pub motion: Motion,
    /// The step's attack intent started the requested state and must not
    /// also count toward the combo buffer.
    pub consumed_attack: bool,
}

impl<S> Default for Decision<S> {
    fn default() -> Self {
        Self {
            state: None,
            facing: None,
            motion: Motion::NONE,
            consumed_attack: false,
        }
    }
}

/// Intent resolution strategy of one character kind.
pub trait Brain {
    type State: StateSet;

    fn decide(&mut self, ctx: DecideContext<'_, Self::State>) -> Decision<Self::State>;
}

/// Player-controlled fighter: walk, dash, jump, punch combos, air kick.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerBrain;

impl Brain for PlayerBrain {
    type State = PlayerState;

    fn decide(&mut self, ctx: DecideContext<'_, PlayerState>) -> Decision<PlayerState> {
        let DecideContext {
            runtime,
            step,
            profile,
            config,
            elapsed,
        } = ctx;
        let intents = step.intents;
        let touching = touching_surface(step.overlaps);
        let mut decision = Decision::default();

        if runtime.flags().is_locked() {
            decision.motion.velocity_x = Some(0.0);
        } else if !runtime.is_attacking() {
            let mut airborne = runtime.is_airborne();

            if intents.jump && !airborne {
                decision.state = Some(PlayerState::Jump);
                decision.motion.velocity_y = Some(config.jump_speed);
                airborne = true;
            }

            match intents.horizontal {
                Some(direction) => {
                    let dashing = runtime.dash().is_armed_for(direction);
                    decision.facing = Some(direction.into());
                    if !airborne {
                        decision.state = Some(if dashing {
                            PlayerState::Run
                        } else {
                            PlayerState::Walk
                        });
                    }
                    let multiplier = if dashing { config.dash_multiplier } else { 1.0 };
                    decision.motion.velocity_x =
                        Some(direction.sign() * profile.stats().walk_speed * multiplier);
                }
                None if !airborne => {
                    decision.state = Some(PlayerState::Idle);
                    decision.motion.velocity_x = Some(0.0);
                }
                None => {}
            }

            if let Some(released) = intents.released {
                if touching {
                    runtime.dash_mut().arm(released, config.dash_window);
                    tracing::debug!(direction = %released, "dash window armed");
                }
            }

            if intents.attack {
                if airborne {
                    decision.state = Some(PlayerState::AirKick);
                } else {
                    decision.state = Some(PlayerState::Punch1);
                    decision.motion.velocity_x = Some(0.0);
                }
                decision.consumed_attack = true;
            } else if intents.shoot && !airborne {
                decision.state = Some(PlayerState::Shoot);
            }
        }

        // Walked off a ledge without jumping.
        let attacking = decision
            .state
            .map_or(runtime.is_attacking(), |state| {
                state.flags().contains(StateFlags::ATTACKING)
            });
        if !touching && !attacking && !runtime.flags().is_locked() {
            decision.state = Some(PlayerState::Jump);
        }

        runtime
            .dash_mut()
            .decay(elapsed, intents.horizontal.is_some());
        decision
    }
}

/// Stationary enemy that attacks once its target comes within range.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnemyBrain {
    target: Option<BodyId>,
}

impl EnemyBrain {
    pub fn new(target: Option<BodyId>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Option<BodyId> {
        self.target
    }

    pub fn set_target(&mut self, target: Option<BodyId>) {
        self.target = target;
    }
}

impl Brain for EnemyBrain {
    type State = EnemyState;

    fn decide(&mut self, ctx: DecideContext<'_, EnemyState>) -> Decision<EnemyState> {
        let mut decision = Decision {
            motion: Motion::STOP,
            ..Decision::default()
        };
        if ctx.runtime.state() != EnemyState::Idle {
            return decision;
        }

        let Some(target) = self.target.and_then(|body| ctx.step.world.position(body)) else {
            return decision;
        };
        let own = ctx.step.position;
        if (target.x - own.x).abs() < ctx.profile.stats().detection_range {
            decision.facing = Some(Facing::toward(own.x, target.x, ctx.runtime.facing()));
            decision.state = Some(EnemyState::Attack);
        }
        decision
    }
}
