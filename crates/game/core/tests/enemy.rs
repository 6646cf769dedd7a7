mod common;

use brawl_core::{
    EnemyMachine, EnemyState, Facing, Motion, StepInput, StepOutcome, TransitionCause, Vec2,
};
use common::{HALF_FRAME, PLAYER_BODY, World, enemy};

fn step_near(machine: &mut EnemyMachine, target: Vec2) -> StepOutcome<EnemyState> {
    let world = World::default().with(PLAYER_BODY, target);
    machine.advance(
        &StepInput::new(HALF_FRAME)
            .at(Vec2::ZERO)
            .with_world(&world),
    )
}

#[test]
fn attacks_target_within_detection_range() {
    let mut machine = enemy(Some(PLAYER_BODY)).with_facing(Facing::Left);
    let outcome = step_near(&mut machine, Vec2::new(1.0, 0.0));

    assert!(outcome.entered(EnemyState::Attack));
    assert_eq!(machine.runtime().facing(), Facing::Right);
    assert_eq!(outcome.motion, Motion::STOP);
}

#[test]
fn faces_a_target_on_the_left() {
    let mut machine = enemy(Some(PLAYER_BODY));
    step_near(&mut machine, Vec2::new(-1.2, 3.0));

    assert_eq!(machine.state(), EnemyState::Attack);
    assert_eq!(machine.runtime().facing(), Facing::Left);
}

#[test]
fn ignores_target_out_of_range() {
    let mut machine = enemy(Some(PLAYER_BODY));
    let outcome = step_near(&mut machine, Vec2::new(1.5, 0.0));

    assert!(outcome.transitions.is_empty());
    assert_eq!(machine.state(), EnemyState::Idle);
    assert_eq!(outcome.motion, Motion::STOP);
}

#[test]
fn retargeting_starts_the_attack() {
    let mut machine = enemy(None);
    let outcome = step_near(&mut machine, Vec2::new(1.0, 0.0));
    assert!(outcome.transitions.is_empty());

    machine.brain_mut().set_target(Some(PLAYER_BODY));
    let outcome = step_near(&mut machine, Vec2::new(1.0, 0.0));

    assert_eq!(machine.brain().target(), Some(PLAYER_BODY));
    assert!(outcome.entered(EnemyState::Attack));
}

#[test]
fn missing_target_is_not_an_error() {
    let mut machine = enemy(Some(PLAYER_BODY));
    let outcome = machine.advance(&StepInput::new(HALF_FRAME));

    assert!(outcome.transitions.is_empty());
    assert_eq!(machine.state(), EnemyState::Idle);
}

#[test]
fn attack_arms_hitbox_then_returns_to_idle_and_repeats() {
    let mut machine = enemy(Some(PLAYER_BODY));
    let target = Vec2::new(1.0, 0.0);

    let armed: Vec<bool> = (0..8)
        .map(|_| step_near(&mut machine, target).hitbox.is_armed())
        .collect();
    assert_eq!(
        armed,
        vec![false, false, false, true, true, false, false, false]
    );
    assert_eq!(machine.state(), EnemyState::Idle);

    let again = step_near(&mut machine, target);
    let restart = again.transitions.first().unwrap();
    assert_eq!(restart.to, EnemyState::Attack);
    assert_eq!(restart.cause, TransitionCause::Intent);
}
