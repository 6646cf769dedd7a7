use crate::anim::FrameClock;
use crate::env::BodyId;
use crate::geometry::Facing;
use crate::input::Direction;

use super::{StateFlags, StateSet};

/// Time-boxed window after a directional release in which pressing the same
/// direction again moves at dash speed. Player only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashWindow {
    direction: Option<Direction>,
    timer: f32,
    armed: bool,
}

impl DashWindow {
    /// Arms the window for `direction`, or resets the timer if already armed.
    /// Re-arming never stacks time.
    pub fn arm(&mut self, direction: Direction, seconds: f32) {
        self.direction = Some(direction);
        self.timer = seconds;
        self.armed = true;
    }

    /// Lets the window run down. Time only passes while no direction is held,
    /// so a window cannot expire mid-press.
    ///
    /// Runs on every player step, hurt included, so the window keeps
    /// draining while the character is locked in a hit reaction.
    pub fn decay(&mut self, elapsed: f32, direction_held: bool) {
        if !self.armed || direction_held {
            return;
        }
        self.timer -= elapsed;
        if self.timer <= 0.0 {
            self.timer = 0.0;
            self.armed = false;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_armed_for(&self, direction: Direction) -> bool {
        self.armed && self.direction == Some(direction)
    }

    pub fn remaining(&self) -> f32 {
        self.timer
    }
}

/// Mutable state of one character instance.
///
/// Created at spawn with full health in the idle state and discarded once the
/// defeat sequence completes. Only the owning state machine mutates it; the
/// public surface is read-only apart from the dash window, which the player's
/// intent resolution drives.
#[derive(Clone, Debug)]
pub struct CharacterRuntime<S: StateSet> {
    body: BodyId,
    state: S,
    flags: StateFlags,
    clock: FrameClock,
    facing: Facing,
    health: u32,
    max_health: u32,
    invulnerable: bool,
    tinted: bool,
    buffered_attack: bool,
    dash: DashWindow,
    destroyed: bool,
}

impl<S: StateSet> CharacterRuntime<S> {
    pub fn spawn(body: BodyId, max_health: u32) -> Self {
        Self {
            body,
            state: S::IDLE,
            flags: S::IDLE.flags(),
            clock: FrameClock::default(),
            facing: Facing::default(),
            health: max_health,
            max_health,
            invulnerable: false,
            tinted: false,
            buffered_attack: false,
            dash: DashWindow::default(),
            destroyed: false,
        }
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    pub fn state(&self) -> S {
        self.state
    }

    pub fn flags(&self) -> StateFlags {
        self.flags
    }

    pub fn frame_index(&self) -> usize {
        self.clock.index()
    }

    pub fn frame_timer(&self) -> f32 {
        self.clock.timer()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    pub fn is_airborne(&self) -> bool {
        self.flags.contains(StateFlags::AIRBORNE)
    }

    pub fn is_attacking(&self) -> bool {
        self.flags.contains(StateFlags::ATTACKING)
    }

    pub fn is_tinted(&self) -> bool {
        self.tinted
    }

    pub fn buffered_attack(&self) -> bool {
        self.buffered_attack
    }

    pub fn dash(&self) -> &DashWindow {
        &self.dash
    }

    pub fn dash_mut(&mut self) -> &mut DashWindow {
        &mut self.dash
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Enters `state`: frame index and timer restart, the combo buffer is
    /// cleared and flags are recomputed from the state table.
    pub(crate) fn enter(&mut self, state: S) {
        self.state = state;
        self.flags = state.flags();
        self.clock.reset();
        self.buffered_attack = false;
    }

    pub(crate) fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    pub(crate) fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub(crate) fn set_invulnerable(&mut self, invulnerable: bool) {
        self.invulnerable = invulnerable;
    }

    pub(crate) fn set_tinted(&mut self, tinted: bool) {
        self.tinted = tinted;
    }

    pub(crate) fn buffer_attack(&mut self) {
        self.buffered_attack = true;
    }

    /// Removes one point of health. Health never goes below zero.
    pub(crate) fn take_damage(&mut self) -> u32 {
        self.health = self.health.saturating_sub(1);
        self.health
    }

    pub(crate) fn destroy(&mut self) {
        self.destroyed = true;
    }
}
