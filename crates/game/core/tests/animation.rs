mod common;

use brawl_core::{
    HitboxCommand, Intents, PlayerMachine, PlayerState, StepInput, StepOutcome, TransitionCause,
};
use common::{HALF_FRAME, SPF, floor, player};

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

#[test]
fn looping_track_wraps_without_transitions() {
    let mut machine = player();

    let mut outcomes = Vec::new();
    for _ in 0..4 {
        outcomes.push(grounded(&mut machine, Intents::NONE));
    }

    let sprites: Vec<_> = outcomes
        .iter()
        .map(|o| o.sprite.as_ref().map(|s| s.sprite.to_string()))
        .collect();
    assert_eq!(
        sprites,
        vec![
            Some("idle_0".to_string()),
            Some("idle_1".to_string()),
            Some("idle_1".to_string()),
            Some("idle_0".to_string()),
        ]
    );
    assert!(outcomes.iter().all(|o| o.transitions.is_empty()));
    assert_eq!(machine.state(), PlayerState::Idle);
}

#[test]
fn sequence_completes_exactly_once() {
    let mut machine = player();
    grounded(&mut machine, Intents::attack());

    let punch = machine
        .profile()
        .track(PlayerState::Punch1)
        .map(|track| track.duration());
    assert_eq!(punch, Some(4.0 * SPF));

    // Twice the sequence length, so a second completion would show up.
    let steps = (2.0 * 4.0 * SPF / HALF_FRAME) as usize;
    let mut completions = 0;
    for _ in 0..steps {
        let outcome = grounded(&mut machine, Intents::NONE);
        completions += outcome
            .transitions
            .iter()
            .filter(|t| t.from == PlayerState::Punch1 && t.cause == TransitionCause::Completed)
            .count();
    }

    assert_eq!(completions, 1);
    assert_eq!(machine.state(), PlayerState::Idle);
}

#[test]
fn sequence_hands_off_after_its_last_frame() {
    let mut machine = player();
    let first = grounded(&mut machine, Intents::attack());
    assert!(first.entered(PlayerState::Punch1));

    // Four frames of 1/8 s are eight half-frame steps.
    for _ in 1..7 {
        grounded(&mut machine, Intents::NONE);
        assert_eq!(machine.state(), PlayerState::Punch1);
    }
    let last = grounded(&mut machine, Intents::NONE);

    assert!(last.entered(PlayerState::Idle));
    assert_eq!(machine.runtime().frame_index(), 0);
    assert_eq!(machine.runtime().frame_timer(), 0.0);
}

#[test]
fn hold_last_frame_clamps_until_an_event() {
    let mut machine = player();
    let outcome = grounded(&mut machine, Intents::jump());
    assert!(outcome.entered(PlayerState::Jump));
    assert_eq!(outcome.motion.velocity_y, Some(5.0));

    for _ in 0..10 {
        airborne(&mut machine, Intents::NONE);
    }

    assert_eq!(machine.state(), PlayerState::Jump);
    assert_eq!(machine.runtime().frame_index(), 1);
    let outcome = airborne(&mut machine, Intents::NONE);
    assert_eq!(
        outcome.sprite.map(|s| s.sprite.to_string()),
        Some("jump_1".to_string())
    );
}

#[test]
fn zero_length_step_is_a_pure_query() {
    let mut machine = player();
    grounded(&mut machine, Intents::attack());
    grounded(&mut machine, Intents::NONE);
    grounded(&mut machine, Intents::NONE);

    let before = machine.runtime().clone();
    let floor = floor();
    let step = StepInput::new(0.0)
        .with_intents(Intents::attack().with_jump())
        .with_overlaps(&floor);
    let first = machine.advance(&step);
    let second = machine.advance(&step);

    assert_eq!(first, second);
    assert!(first.transitions.is_empty());
    assert!(first.requests.is_empty());
    assert!(first.sprite.is_some());
    assert_eq!(machine.state(), before.state());
    assert_eq!(machine.runtime().frame_index(), before.frame_index());
    assert_eq!(machine.runtime().frame_timer(), before.frame_timer());
    assert!(!machine.runtime().buffered_attack());
}

#[test]
fn invalid_elapsed_is_treated_as_zero() {
    let mut machine = player();
    let index = machine.runtime().frame_index();

    for elapsed in [f32::NAN, -1.0, f32::INFINITY] {
        let outcome = machine.advance(&StepInput::new(elapsed).with_intents(Intents::jump()));
        assert!(outcome.transitions.is_empty());
        assert_eq!(outcome.hitbox, HitboxCommand::Disarmed);
    }

    assert_eq!(machine.state(), PlayerState::Idle);
    assert_eq!(machine.runtime().frame_index(), index);
}

#[test]
fn multi_frame_step_wraps_looping_track() {
    let mut machine = player();
    let floor = floor();
    let outcome = machine.advance(&StepInput::new(3.0 * SPF).with_overlaps(&floor));

    assert_eq!(machine.state(), PlayerState::Idle);
    assert_eq!(machine.runtime().frame_index(), 1);
    assert_eq!(
        outcome.sprite.map(|s| s.sprite.to_string()),
        Some("idle_1".to_string())
    );
}

#[test]
fn huge_step_on_looping_track_returns() {
    let mut machine = player();
    let floor = floor();
    let outcome = machine.advance(&StepInput::new(1.0e8).with_overlaps(&floor));

    assert!(outcome.transitions.is_empty());
    assert_eq!(machine.state(), PlayerState::Idle);
    assert!(machine.runtime().frame_index() < 2);
    assert!(machine.runtime().frame_timer() < SPF);
}

#[test]
fn huge_step_on_hold_last_frame_track_clamps() {
    let mut machine = player();
    grounded(&mut machine, Intents::jump());

    let outcome = machine.advance(&StepInput::new(1.0e8));

    assert_eq!(machine.state(), PlayerState::Jump);
    assert_eq!(machine.runtime().frame_index(), 1);
    assert!(machine.runtime().frame_timer() < SPF);
    assert_eq!(
        outcome.sprite.map(|s| s.sprite.to_string()),
        Some("jump_1".to_string())
    );
}

#[test]
fn huge_step_on_sequence_completes_once() {
    let mut machine = player();
    grounded(&mut machine, Intents::attack());

    let floor = floor();
    let outcome = machine.advance(&StepInput::new(1.0e8).with_overlaps(&floor));

    let completed: Vec<_> = outcome
        .transitions
        .iter()
        .filter(|t| t.cause == TransitionCause::Completed)
        .collect();
    assert_eq!(completed.len(), 1);
    assert_eq!(machine.state(), PlayerState::Idle);
}
