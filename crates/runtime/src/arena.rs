//! Step driver for one encounter.
//!
//! The arena owns the player machine and every enemy machine, each bound to a
//! physics body. [`Arena::step`] feeds each character its physics view, runs
//! the core step, and routes the outcome to the collaborators.

use std::collections::BTreeSet;

use brawl_core::{
    BodyId, Brain, CombatMachine, EnemyMachine, IntentCollector, Intents, PlayerMachine, Request,
    StateSet, StepInput, StepOutcome,
};

use crate::api::{InputSource, Lifecycle, PhysicsBackend, Presenter, Result, RuntimeError};
use crate::event::ArenaEvent;

/// Everything that happened during one [`Arena::step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Index of the step, starting at 0.
    pub step: u64,
    pub events: Vec<ArenaEvent>,
}

impl StepReport {
    pub fn destroyed(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.events.iter().filter_map(|event| match event {
            ArenaEvent::Destroyed { body } => Some(*body),
            _ => None,
        })
    }

    pub fn hits(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ArenaEvent::HitTaken { .. }))
            .count()
    }
}

/// One player and any number of enemies stepped in roster order.
pub struct Arena {
    player: PlayerMachine,
    intents: IntentCollector,
    enemies: Vec<EnemyMachine>,
    steps: u64,
}

impl Arena {
    /// Create a new arena builder
    pub fn builder() -> ArenaBuilder {
        ArenaBuilder::new()
    }

    pub fn player(&self) -> &PlayerMachine {
        &self.player
    }

    /// Enemies still in play, in roster order.
    pub fn enemies(&self) -> &[EnemyMachine] {
        &self.enemies
    }

    pub fn enemy(&self, body: BodyId) -> Option<&EnemyMachine> {
        self.enemies.iter().find(|enemy| enemy.body() == body)
    }

    /// Number of steps run so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Runs every character through one simulation step.
    ///
    /// The player goes first, then enemies in the order they were added.
    /// Enemies whose defeat sequence finished are handed to `lifecycle` and
    /// dropped from the roster.
    pub fn step(
        &mut self,
        elapsed: f32,
        physics: &mut impl PhysicsBackend,
        input: &mut impl InputSource,
        presenter: &mut impl Presenter,
        lifecycle: &mut impl Lifecycle,
    ) -> StepReport {
        let mut report = StepReport {
            step: self.steps,
            events: Vec::new(),
        };

        input.begin_step();
        let intents = self.intents.collect(input);
        drive(
            &mut self.player,
            elapsed,
            intents,
            physics,
            presenter,
            lifecycle,
            &mut report,
        );

        for enemy in &mut self.enemies {
            drive(
                enemy,
                elapsed,
                Intents::NONE,
                physics,
                presenter,
                lifecycle,
                &mut report,
            );
        }

        let before = self.enemies.len();
        self.enemies.retain(|enemy| !enemy.is_destroyed());
        if self.enemies.len() != before {
            tracing::info!(
                step = self.steps,
                remaining = self.enemies.len(),
                "removed destroyed enemies"
            );
        }

        self.steps += 1;
        report
    }
}

/// Steps one character and forwards its outcome.
fn drive<B: Brain>(
    machine: &mut CombatMachine<B>,
    elapsed: f32,
    intents: Intents,
    physics: &mut impl PhysicsBackend,
    presenter: &mut impl Presenter,
    lifecycle: &mut impl Lifecycle,
    report: &mut StepReport,
) {
    if machine.is_destroyed() {
        return;
    }
    let body = machine.body();
    let Some(position) = physics.position(body) else {
        tracing::warn!(%body, "character has no physics body, skipping step");
        return;
    };

    let overlaps = physics.overlaps(body);
    let landed = physics.take_landed(body);
    let outcome = {
        let step = StepInput::new(elapsed)
            .with_intents(intents)
            .with_overlaps(&overlaps)
            .with_landed(landed)
            .at(position)
            .with_world(&*physics);
        machine.advance(&step)
    };

    dispatch(body, &outcome, physics, presenter, lifecycle);
    report.events.extend(ArenaEvent::from_outcome(body, &outcome));
}

fn dispatch<S: StateSet>(
    body: BodyId,
    outcome: &StepOutcome<S>,
    physics: &mut impl PhysicsBackend,
    presenter: &mut impl Presenter,
    lifecycle: &mut impl Lifecycle,
) {
    physics.apply_motion(body, outcome.motion);
    physics.set_hitbox(body, outcome.hitbox);
    presenter.present(body, outcome);

    for request in &outcome.requests {
        match *request {
            Request::DeactivateCollider(collider) => physics.deactivate_collider(collider),
            Request::SpawnHitEffect { position } => presenter.spawn_hit_effect(position),
            Request::Tint(tint) => presenter.tint(body, tint),
            Request::Destroy => {
                tracing::info!(%body, "destroying character");
                lifecycle.destroy(body);
            }
        }
    }
}

/// Builder for [`Arena`].
#[derive(Default)]
pub struct ArenaBuilder {
    player: Option<PlayerMachine>,
    enemies: Vec<EnemyMachine>,
}

impl ArenaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, machine: PlayerMachine) -> Self {
        self.player = Some(machine);
        self
    }

    pub fn enemy(mut self, machine: EnemyMachine) -> Self {
        self.enemies.push(machine);
        self
    }

    pub fn enemies(mut self, machines: impl IntoIterator<Item = EnemyMachine>) -> Self {
        self.enemies.extend(machines);
        self
    }

    pub fn build(self) -> Result<Arena> {
        let player = self.player.ok_or(RuntimeError::MissingPlayer)?;

        let mut bodies = BTreeSet::new();
        bodies.insert(player.body());
        for enemy in &self.enemies {
            if !bodies.insert(enemy.body()) {
                return Err(RuntimeError::DuplicateBody { body: enemy.body() });
            }
        }

        tracing::debug!(
            player = %player.body(),
            enemies = self.enemies.len(),
            "arena assembled"
        );
        Ok(Arena {
            player,
            intents: IntentCollector::new(),
            enemies: self.enemies,
            steps: 0,
        })
    }
}
