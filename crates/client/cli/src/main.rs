//! Headless encounter simulator.
//!
//! Runs a scripted player against a row of enemies on a flat floor, logging
//! every state change, and prints a summary when the tape or the step budget
//! runs out.
mod config;
mod sandbox;
mod script;
mod summary;

use std::sync::Arc;

use anyhow::{Context, Result};
use brawl_content::{ConfigLoader, ProfileLoader, presets};
use brawl_core::{
    BodyId, CharacterProfile, CombatConfig, EnemyMachine, EnemyState, Facing, PlayerMachine,
    PlayerState, StateSet, StepOutcome, Tint, Vec2,
};
use brawl_runtime::{Arena, ArenaEvent, Lifecycle, Presenter};
use tracing_subscriber::EnvFilter;

use config::SimConfig;
use sandbox::{Sandbox, Team};
use script::InputScript;
use summary::Encounter;

const PLAYER_BODY: BodyId = BodyId(1);

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();
    setup_logging();

    let config = SimConfig::from_env();
    tracing::info!(?config, "starting encounter");

    let combat = match &config.combat_config {
        Some(path) => ConfigLoader::load(path)?,
        None => CombatConfig::default(),
    };
    let player_profile = load_player(&config)?;
    let enemy_profile = load_enemy(&config)?;
    let mut input = match &config.script {
        Some(path) => InputScript::load(path)?,
        None => InputScript::parse(script::DEMO)?,
    };

    let mut sandbox = Sandbox::new();
    sandbox.spawn(PLAYER_BODY, Team::Player, 0.0);
    let mut builder =
        Arena::builder().player(PlayerMachine::player(player_profile, combat, PLAYER_BODY));
    for i in 0..config.enemy_count {
        let body = BodyId(PLAYER_BODY.0 + 1 + i as u32);
        let x = config.enemy_spacing * (i + 1) as f32;
        sandbox.spawn(body, Team::Enemy, x);
        builder = builder.enemy(
            EnemyMachine::enemy(enemy_profile.clone(), combat, body, Some(PLAYER_BODY))
                .with_facing(Facing::Left),
        );
    }
    let mut arena = builder.build().context("Failed to assemble arena")?;

    let mut presenter = LogPresenter;
    let mut graveyard = Graveyard::default();
    let mut encounter = Encounter::default();

    for _ in 0..config.steps {
        let report = arena.step(
            config.step_seconds,
            &mut sandbox,
            &mut input,
            &mut presenter,
            &mut graveyard,
        );
        for event in &report.events {
            log_event(report.step, event);
        }
        encounter.record(&report);

        sandbox.integrate(config.step_seconds);
        for body in graveyard.bodies.drain(..) {
            sandbox.despawn(body);
        }

        if arena.enemies().is_empty() {
            tracing::info!(step = report.step, "all enemies defeated");
            break;
        }
    }

    encounter.finish(&arena);
    print!("{encounter}");
    Ok(())
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_player(config: &SimConfig) -> Result<Arc<CharacterProfile<PlayerState>>> {
    let profile = match &config.player_profile {
        Some(path) => ProfileLoader::load(path)?,
        None => presets::player().context("Built-in player profile is invalid")?,
    };
    Ok(Arc::new(profile))
}

fn load_enemy(config: &SimConfig) -> Result<Arc<CharacterProfile<EnemyState>>> {
    let profile = match &config.enemy_profile {
        Some(path) => ProfileLoader::load(path)?,
        None => presets::chow_mein().context("Built-in enemy profile is invalid")?,
    };
    Ok(Arc::new(profile))
}

fn log_event(step: u64, event: &ArenaEvent) {
    match event {
        ArenaEvent::StateChanged {
            body,
            from,
            to,
            cause,
        } => tracing::debug!(step, %body, %from, %to, %cause, "state changed"),
        ArenaEvent::HitTaken { body, hit } => tracing::info!(
            step,
            %body,
            health = hit.health,
            defeated = hit.defeated,
            "hit landed"
        ),
        ArenaEvent::Destroyed { body } => tracing::info!(step, %body, "destroyed"),
    }
}

/// Presenter that traces sprite changes instead of drawing them.
struct LogPresenter;

impl Presenter for LogPresenter {
    fn present<S: StateSet>(&mut self, body: BodyId, outcome: &StepOutcome<S>) {
        if let Some(frame) = &outcome.sprite {
            tracing::trace!(
                %body,
                sprite = %frame.sprite,
                facing = ?frame.facing,
                armed = outcome.hitbox.is_armed(),
                "frame"
            );
        }
    }

    fn spawn_hit_effect(&mut self, position: Vec2) {
        tracing::debug!(%position, "hit effect");
    }

    fn tint(&mut self, body: BodyId, tint: Tint) {
        tracing::debug!(%body, %tint, "tint");
    }
}

/// Collects destroyed bodies so they leave the sandbox after the step.
#[derive(Default)]
struct Graveyard {
    bodies: Vec<BodyId>,
}

impl Lifecycle for Graveyard {
    fn destroy(&mut self, body: BodyId) {
        self.bodies.push(body);
    }
}
