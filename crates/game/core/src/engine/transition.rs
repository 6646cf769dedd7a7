//! State entry shared by intents, damage, landing and completion.

use crate::error::CombatError;
use crate::profile::CharacterProfile;
use crate::state::{CharacterRuntime, StateFlags, StateSet};

use super::errors::InvariantViolation;
use super::outcome::{Request, StepOutcome, Tint, Transition, TransitionCause};

/// Moves `runtime` into `to` and records the change.
///
/// Unforced requests for the current state are no-ops, so a held direction
/// keeps its loop running. Forced entries always restart the sequence.
/// Returns false when nothing changed.
pub(crate) fn enter_state<S: StateSet>(
    runtime: &mut CharacterRuntime<S>,
    profile: &CharacterProfile<S>,
    to: S,
    cause: TransitionCause,
    forced: bool,
    outcome: &mut StepOutcome<S>,
) -> bool {
    let from = runtime.state();
    if from == to && !forced {
        return false;
    }
    if !profile.tracks().contains(to) {
        let violation = InvariantViolation::UntrackedState {
            state: to.to_string(),
        };
        tracing::warn!(
            code = violation.error_code(),
            severity = violation.severity().as_str(),
            profile = profile.name(),
            %from,
            %violation,
            "skipping transition"
        );
        return false;
    }

    runtime.enter(to);

    let leaving_reaction = from.flags().contains(StateFlags::HIT_REACTION)
        && !to
            .flags()
            .intersects(StateFlags::HIT_REACTION | StateFlags::DEFEAT);
    if leaving_reaction {
        release_hit_reaction(runtime, outcome);
    }

    outcome.push_transition(Transition { from, to, cause });
    tracing::debug!(
        profile = profile.name(),
        body = %runtime.body(),
        %from,
        %to,
        %cause,
        "state transition"
    );
    true
}

/// Clears the invulnerability and hit tint granted by a hit reaction.
pub(crate) fn release_hit_reaction<S: StateSet>(
    runtime: &mut CharacterRuntime<S>,
    outcome: &mut StepOutcome<S>,
) {
    runtime.set_invulnerable(false);
    if runtime.is_tinted() {
        runtime.set_tinted(false);
        outcome.push_request(Request::Tint(Tint::Normal));
    }
}
