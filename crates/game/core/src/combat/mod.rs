//! Damage intake.
//!
//! Resolves at most one hit per character per step from the overlaps the
//! physics collaborator reported. The consumed attack collider is deactivated
//! so the same swing or projectile cannot land twice.

use crate::engine::transition::enter_state;
use crate::engine::{Request, StepOutcome, Tint, TransitionCause};
use crate::env::{ColliderId, Overlap};
use crate::geometry::{Facing, Vec2};
use crate::profile::{CharacterProfile, HealthModel, InvulnerabilityRelease};
use crate::state::{CharacterRuntime, StateSet};

/// A hit absorbed during a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub collider: ColliderId,
    /// Where the hit effect belongs: the projectile's own position, or the
    /// midpoint between the character and the melee collider.
    pub effect_position: Vec2,
    /// Health left after the hit.
    pub health: u32,
    pub defeated: bool,
}

/// Applies hostile overlaps to a character.
#[derive(Clone, Copy, Debug, Default)]
pub struct DamageResolver;

impl DamageResolver {
    /// Resolves the first hostile overlap, if the character can take it.
    ///
    /// Destroyed, invulnerable and already defeated characters ignore every
    /// overlap. Surviving a hit forces the hit reaction; a tracked health pool
    /// reaching zero forces the defeat state instead.
    pub fn resolve<S: StateSet>(
        runtime: &mut CharacterRuntime<S>,
        profile: &CharacterProfile<S>,
        position: Vec2,
        overlaps: &[Overlap],
        outcome: &mut StepOutcome<S>,
    ) -> Option<Hit> {
        let rules = *profile.damage();
        if runtime.is_destroyed() || runtime.is_invulnerable() {
            return None;
        }
        if rules.health == HealthModel::Tracked && runtime.health() == 0 {
            return None;
        }

        let overlap = overlaps.iter().find(|overlap| overlap.tag == rules.hostile)?;
        outcome.push_request(Request::DeactivateCollider(overlap.collider));

        let health = match rules.health {
            HealthModel::Tracked => runtime.take_damage(),
            HealthModel::ReactionOnly => runtime.health(),
        };
        let defeated = rules.health == HealthModel::Tracked && health == 0;

        let effect_position = if overlap.projectile {
            overlap.position
        } else {
            position.midpoint(overlap.position)
        };
        if rules.spawn_hit_effect {
            outcome.push_request(Request::SpawnHitEffect {
                position: effect_position,
            });
        }

        if rules.face_attacker {
            let facing = Facing::toward(position.x, overlap.owner_position.x, runtime.facing());
            runtime.set_facing(facing);
        }

        if defeated {
            let target = S::DEFEAT.unwrap_or_else(|| {
                tracing::warn!(
                    profile = profile.name(),
                    "defeated character has no defeat state, playing hit reaction"
                );
                S::HIT_REACTION
            });
            enter_state(runtime, profile, target, TransitionCause::Defeated, true, outcome);
            runtime.set_invulnerable(true);
            tracing::info!(
                profile = profile.name(),
                body = %runtime.body(),
                "character defeated"
            );
        } else {
            enter_state(
                runtime,
                profile,
                S::HIT_REACTION,
                TransitionCause::Damaged,
                true,
                outcome,
            );
            runtime.set_invulnerable(rules.release != InvulnerabilityRelease::AfterFrames(0));
            if rules.tint_on_hit && !runtime.is_tinted() {
                runtime.set_tinted(true);
                outcome.push_request(Request::Tint(Tint::Hit));
            }
            tracing::debug!(
                profile = profile.name(),
                body = %runtime.body(),
                health,
                collider = %overlap.collider,
                "hit absorbed"
            );
        }

        Some(Hit {
            collider: overlap.collider,
            effect_position,
            health,
            defeated,
        })
    }
}
