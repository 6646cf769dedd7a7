//! Input intent collection.
//!
//! Raw device polling is a collaborator concern. The collaborator answers
//! held/pressed/released queries per logical [`Control`]; the
//! [`IntentCollector`] samples it once per step and produces the discrete
//! [`Intents`] the player's state machine consumes. Nothing is queued across
//! steps here; combo buffering happens inside the state machine.

/// Logical controls a player character responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Control {
    Left,
    Right,
    Jump,
    Attack,
    Shoot,
}

/// Raw input collaborator, sampled once per simulation step.
pub trait RawInput {
    /// Control is currently held down.
    fn held(&self, control: Control) -> bool;

    /// Control went down during this step.
    fn pressed(&self, control: Control) -> bool;

    /// Control went up during this step.
    ///
    /// Sources that cannot report releases may keep the default; the
    /// collector then derives releases from the held state of the previous
    /// sample.
    fn released(&self, control: Control) -> bool {
        let _ = control;
        false
    }
}

/// Horizontal direction of a movement intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Discrete intents for one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    /// Direction currently held. Left wins when both are held.
    pub horizontal: Option<Direction>,
    /// Direction released during this step.
    pub released: Option<Direction>,
    pub jump: bool,
    pub attack: bool,
    pub shoot: bool,
}

impl Intents {
    pub const NONE: Self = Self {
        horizontal: None,
        released: None,
        jump: false,
        attack: false,
        shoot: false,
    };

    pub fn holding(direction: Direction) -> Self {
        Self {
            horizontal: Some(direction),
            ..Self::NONE
        }
    }

    pub fn releasing(direction: Direction) -> Self {
        Self {
            released: Some(direction),
            ..Self::NONE
        }
    }

    pub fn attack() -> Self {
        Self {
            attack: true,
            ..Self::NONE
        }
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::NONE
        }
    }

    pub fn with_attack(mut self) -> Self {
        self.attack = true;
        self
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::NONE
    }
}

/// Converts raw control state into per-step [`Intents`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IntentCollector {
    left_was_held: bool,
    right_was_held: bool,
}

impl IntentCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples `input` once and returns this step's intents.
    pub fn collect(&mut self, input: &(impl RawInput + ?Sized)) -> Intents {
        let left = input.held(Control::Left);
        let right = input.held(Control::Right);

        let horizontal = if left {
            Some(Direction::Left)
        } else if right {
            Some(Direction::Right)
        } else {
            None
        };

        let left_released = input.released(Control::Left) || (self.left_was_held && !left);
        let right_released = input.released(Control::Right) || (self.right_was_held && !right);
        let released = if left_released {
            Some(Direction::Left)
        } else if right_released {
            Some(Direction::Right)
        } else {
            None
        };

        self.left_was_held = left;
        self.right_was_held = right;

        Intents {
            horizontal,
            released,
            jump: input.pressed(Control::Jump),
            attack: input.pressed(Control::Attack),
            shoot: input.pressed(Control::Shoot),
        }
    }
}
