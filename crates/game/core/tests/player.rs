mod common;

use brawl_core::{
    ColliderId, CombatConfig, Direction, Facing, HitboxCommand, Intents, PlayerMachine,
    PlayerState, Request, StepInput, StepOutcome, TransitionCause, Vec2,
};
use common::{
    HALF_FRAME, PLAYER_BODY, enemy_swing, floor, player, player_profile, punch1_hitbox,
};

fn grounded(machine: &mut PlayerMachine, intents: Intents) -> StepOutcome<PlayerState> {
    let floor = floor();
    let step = StepInput::new(HALF_FRAME)
        .with_intents(intents)
        .with_overlaps(&floor);
    machine.advance(&step)
}

fn airborne(machine: &mut PlayerMachine, intents: Intents) -> StepOutcome<PlayerState> {
    machine.advance(&StepInput::new(HALF_FRAME).with_intents(intents))
}

fn land(machine: &mut PlayerMachine) -> StepOutcome<PlayerState> {
    let floor = floor();
    let step = StepInput::new(HALF_FRAME)
        .with_overlaps(&floor)
        .with_landed(true);
    machine.advance(&step)
}

#[test]
fn buffered_attack_chains_into_punch2() {
    let mut machine = player();
    grounded(&mut machine, Intents::attack());
    grounded(&mut machine, Intents::NONE);
    grounded(&mut machine, Intents::attack());
    assert!(machine.runtime().buffered_attack());

    for _ in 3..7 {
        grounded(&mut machine, Intents::NONE);
    }
    let outcome = grounded(&mut machine, Intents::NONE);

    assert_eq!(machine.state(), PlayerState::Punch2);
    let last = outcome.transitions.last().unwrap();
    assert_eq!(last.from, PlayerState::Punch1);
    assert_eq!(last.cause, TransitionCause::Combo);
    assert!(!machine.runtime().buffered_attack());

    for _ in 0..4 {
        grounded(&mut machine, Intents::NONE);
    }
    assert_eq!(machine.state(), PlayerState::Idle);
}

#[test]
fn attack_that_starts_punch1_is_not_buffered() {
    let mut machine = player();
    grounded(&mut machine, Intents::attack());
    assert!(!machine.runtime().buffered_attack());

    for _ in 0..7 {
        grounded(&mut machine, Intents::NONE);
    }

    assert_eq!(machine.state(), PlayerState::Idle);
}

#[test]
fn punch1_hitbox_is_armed_only_on_its_frame() {
    let mut machine = player();
    let armed: Vec<bool> = (0..8)
        .map(|i| {
            let intents = if i == 0 { Intents::attack() } else { Intents::NONE };
            grounded(&mut machine, intents).hitbox.is_armed()
        })
        .collect();

    assert_eq!(
        armed,
        vec![false, false, false, true, true, false, false, false]
    );
}

#[test]
fn facing_left_mirrors_the_hitbox() {
    let mut machine = player().with_facing(Facing::Left);
    grounded(&mut machine, Intents::attack());
    for _ in 0..2 {
        grounded(&mut machine, Intents::NONE);
    }
    let outcome = grounded(&mut machine, Intents::NONE);

    let HitboxCommand::Armed(hitbox) = outcome.hitbox else {
        panic!("expected an armed hitbox, got {:?}", outcome.hitbox);
    };
    let authored = punch1_hitbox();
    assert_eq!(hitbox.offset.x, -authored.offset.x);
    assert_eq!(hitbox.offset.y, authored.offset.y);
    assert_eq!(hitbox.size, authored.size);
    assert_eq!(outcome.sprite.unwrap().facing, Facing::Left);
}

#[test]
fn walking_sets_facing_and_speed() {
    let mut machine = player();
    let outcome = grounded(&mut machine, Intents::holding(Direction::Left));

    assert!(outcome.entered(PlayerState::Walk));
    assert_eq!(outcome.motion.velocity_x, Some(-2.0));
    assert_eq!(machine.runtime().facing(), Facing::Left);

    // Holding the same direction keeps the loop running.
    let outcome = grounded(&mut machine, Intents::holding(Direction::Left));
    assert!(outcome.transitions.is_empty());
    assert_eq!(machine.runtime().frame_index(), 1);
}

#[test]
fn release_then_press_same_direction_runs() {
    let mut machine = player();
    grounded(&mut machine, Intents::holding(Direction::Right));
    let released = grounded(&mut machine, Intents::releasing(Direction::Right));
    assert!(released.entered(PlayerState::Idle));
    assert!(machine.runtime().dash().is_armed_for(Direction::Right));

    let outcome = grounded(&mut machine, Intents::holding(Direction::Right));

    assert!(outcome.entered(PlayerState::Run));
    assert_eq!(outcome.motion.velocity_x, Some(4.0));
}

#[test]
fn long_hold_then_quick_repress_dashes() {
    let mut machine = player();
    // One second of walking left.
    for _ in 0..16 {
        let outcome = grounded(&mut machine, Intents::holding(Direction::Left));
        assert_eq!(outcome.motion.velocity_x, Some(-2.0));
    }
    grounded(&mut machine, Intents::releasing(Direction::Left));
    grounded(&mut machine, Intents::NONE);

    // Pressed again 0.125 s after the release.
    let outcome = grounded(&mut machine, Intents::holding(Direction::Left));

    assert!(outcome.entered(PlayerState::Run));
    assert_eq!(outcome.motion.velocity_x, Some(-4.0));
    assert_eq!(machine.runtime().facing(), Facing::Left);
}

#[test]
fn longer_dash_window_outlasts_the_default() {
    let config = CombatConfig::default().with_dash_window(0.3);
    let mut machine = PlayerMachine::player(player_profile(), config, PLAYER_BODY);
    grounded(&mut machine, Intents::holding(Direction::Right));
    grounded(&mut machine, Intents::releasing(Direction::Right));
    grounded(&mut machine, Intents::NONE);
    grounded(&mut machine, Intents::NONE);
    assert!(machine.runtime().dash().is_armed_for(Direction::Right));

    let outcome = grounded(&mut machine, Intents::holding(Direction::Right));

    assert!(outcome.entered(PlayerState::Run));
}

#[test]
fn jump_uses_configured_speed() {
    let config = CombatConfig::default().with_jump_speed(8.0);
    let mut machine = PlayerMachine::player(player_profile(), config, PLAYER_BODY);

    let outcome = grounded(&mut machine, Intents::jump());

    assert!(outcome.entered(PlayerState::Jump));
    assert_eq!(outcome.motion.velocity_y, Some(machine.config().jump_speed));
    assert_eq!(machine.config().jump_speed, 8.0);
}

#[test]
fn dash_window_expires_while_nothing_is_held() {
    let mut machine = player();
    grounded(&mut machine, Intents::holding(Direction::Right));
    grounded(&mut machine, Intents::releasing(Direction::Right));
    grounded(&mut machine, Intents::NONE);
    grounded(&mut machine, Intents::NONE);
    assert!(!machine.runtime().dash().is_armed());

    let outcome = grounded(&mut machine, Intents::holding(Direction::Right));

    assert!(outcome.entered(PlayerState::Walk));
    assert_eq!(outcome.motion.velocity_x, Some(2.0));
}

#[test]
fn dash_window_pauses_while_a_direction_is_held() {
    let mut machine = player();
    grounded(&mut machine, Intents::holding(Direction::Right));
    grounded(&mut machine, Intents::releasing(Direction::Right));
    for _ in 0..10 {
        let outcome = grounded(&mut machine, Intents::holding(Direction::Left));
        assert_eq!(outcome.motion.velocity_x, Some(-2.0));
    }

    let outcome = grounded(&mut machine, Intents::holding(Direction::Right));

    assert!(outcome.entered(PlayerState::Run));
}

#[test]
fn release_in_the_air_does_not_arm_the_dash() {
    let mut machine = player();
    grounded(&mut machine, Intents::jump());
    airborne(&mut machine, Intents::releasing(Direction::Right));

    assert!(!machine.runtime().dash().is_armed());
}

#[test]
fn landing_returns_to_idle() {
    let mut machine = player();
    grounded(&mut machine, Intents::jump());
    airborne(&mut machine, Intents::NONE);
    assert!(machine.runtime().is_airborne());

    let outcome = land(&mut machine);

    let landed = outcome.transitions.first().unwrap();
    assert_eq!(landed.from, PlayerState::Jump);
    assert_eq!(landed.to, PlayerState::Idle);
    assert_eq!(landed.cause, TransitionCause::Landed);
    assert!(!machine.runtime().is_airborne());
}

#[test]
fn walking_off_a_ledge_starts_falling() {
    let mut machine = player();
    grounded(&mut machine, Intents::holding(Direction::Right));

    let outcome = airborne(&mut machine, Intents::holding(Direction::Right));

    assert!(outcome.entered(PlayerState::Jump));
    assert_eq!(outcome.motion.velocity_x, Some(2.0));
    assert_eq!(outcome.motion.velocity_y, None);
}

#[test]
fn attack_in_the_air_is_an_air_kick_cancelled_by_landing() {
    let mut machine = player();
    grounded(&mut machine, Intents::jump());
    let outcome = airborne(&mut machine, Intents::attack());
    assert!(outcome.entered(PlayerState::AirKick));

    let outcome = airborne(&mut machine, Intents::NONE);
    assert!(outcome.hitbox.is_armed());

    land(&mut machine);
    assert_eq!(machine.state(), PlayerState::Idle);
}

#[test]
fn hit_interrupts_an_attack_and_faces_the_attacker() {
    let mut machine = player();
    grounded(&mut machine, Intents::attack());

    let swing = [
        common::floor()[0],
        enemy_swing(9, Vec2::new(-0.4, 0.3), Vec2::new(-1.0, 0.0)),
    ];
    let step = StepInput::new(HALF_FRAME).with_overlaps(&swing);
    let outcome = machine.advance(&step);

    let hurt = outcome.transitions.last().unwrap();
    assert_eq!(hurt.from, PlayerState::Punch1);
    assert_eq!(hurt.to, PlayerState::Hurt);
    assert_eq!(hurt.cause, TransitionCause::Damaged);
    assert_eq!(
        outcome.requests.as_slice(),
        &[Request::DeactivateCollider(ColliderId(9))]
    );
    assert_eq!(outcome.motion.velocity_x, Some(0.0));
    assert_eq!(machine.runtime().facing(), Facing::Left);
    assert_eq!(machine.runtime().health(), 5);
    assert!(machine.runtime().is_invulnerable());

    // Same swing again while hurt is ignored.
    let again = machine.advance(&step);
    assert!(again.requests.is_empty());
    assert!(again.transitions.is_empty());
}

#[test]
fn hurt_ignores_intents_and_landing_then_releases_on_exit() {
    let mut machine = player();
    let swing = [
        common::floor()[0],
        enemy_swing(3, Vec2::new(0.4, 0.3), Vec2::new(1.0, 0.0)),
    ];
    machine.advance(&StepInput::new(HALF_FRAME).with_overlaps(&swing));
    assert_eq!(machine.state(), PlayerState::Hurt);
    assert_eq!(machine.runtime().facing(), Facing::Right);

    let outcome = grounded(&mut machine, Intents::holding(Direction::Left).with_attack());
    assert!(outcome.transitions.is_empty());
    assert_eq!(outcome.motion.velocity_x, Some(0.0));
    assert_eq!(machine.runtime().facing(), Facing::Right);

    land(&mut machine);
    assert_eq!(machine.state(), PlayerState::Hurt);
    assert!(machine.runtime().is_invulnerable());

    let outcome = grounded(&mut machine, Intents::NONE);
    assert!(outcome.entered(PlayerState::Idle));
    assert!(!machine.runtime().is_invulnerable());
}

#[test]
fn dash_window_drains_during_hurt() {
    let mut machine = player();
    grounded(&mut machine, Intents::holding(Direction::Right));
    grounded(&mut machine, Intents::releasing(Direction::Right));
    assert!(machine.runtime().dash().is_armed());

    let swing = [
        common::floor()[0],
        enemy_swing(3, Vec2::new(0.4, 0.3), Vec2::new(1.0, 0.0)),
    ];
    machine.advance(&StepInput::new(HALF_FRAME).with_overlaps(&swing));
    grounded(&mut machine, Intents::NONE);

    assert_eq!(machine.state(), PlayerState::Hurt);
    assert!(!machine.runtime().dash().is_armed());
}

#[test]
fn unconfigured_optional_state_is_skipped() {
    let mut machine = player();
    let floor = floor();
    let step = StepInput::new(HALF_FRAME)
        .with_intents(Intents {
            shoot: true,
            ..Intents::NONE
        })
        .with_overlaps(&floor);

    let outcome = machine.advance(&step);

    assert!(outcome.transitions.is_empty());
    assert_eq!(machine.state(), PlayerState::Idle);
}
