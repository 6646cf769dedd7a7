use brawl_core::{BodyId, Hit, StateSet, StepOutcome, TransitionCause};

/// Events emitted by the arena while stepping characters
#[derive(Debug, Clone, PartialEq)]
pub enum ArenaEvent {
    /// A character changed state
    StateChanged {
        body: BodyId,
        from: String,
        to: String,
        cause: TransitionCause,
    },
    /// A character absorbed a hit
    HitTaken { body: BodyId, hit: Hit },
    /// A character finished its defeat sequence and was removed
    Destroyed { body: BodyId },
}

impl ArenaEvent {
    pub fn body(&self) -> BodyId {
        match self {
            Self::StateChanged { body, .. }
            | Self::HitTaken { body, .. }
            | Self::Destroyed { body } => *body,
        }
    }

    /// Events describing one character's step outcome, in order.
    pub(crate) fn from_outcome<S: StateSet>(
        body: BodyId,
        outcome: &StepOutcome<S>,
    ) -> impl Iterator<Item = ArenaEvent> + '_ {
        let transitions = outcome.transitions.iter().map(move |t| Self::StateChanged {
            body,
            from: t.from.to_string(),
            to: t.to.to_string(),
            cause: t.cause,
        });
        let hit = outcome.hit.map(|hit| Self::HitTaken { body, hit });
        let destroyed = outcome
            .is_destroyed()
            .then_some(Self::Destroyed { body });

        hit.into_iter().chain(transitions).chain(destroyed)
    }
}
