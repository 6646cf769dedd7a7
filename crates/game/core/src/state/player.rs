use super::{StateFlags, StateSet};

/// Animation/behavior modes of the player character.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerState {
    Idle,
    Walk,
    /// Walk while a dash window is armed for the held direction.
    Run,
    /// Hit reaction.
    Hurt,
    Punch1,
    /// Second hit of the ground combo, reached only through a buffered attack.
    Punch2,
    AirKick,
    Jump,
    /// Optional; only reachable when a profile configures a track for it.
    Shoot,
}

impl StateSet for PlayerState {
    const IDLE: Self = Self::Idle;
    const HIT_REACTION: Self = Self::Hurt;
    const DEFEAT: Option<Self> = None;

    fn flags(self) -> StateFlags {
        match self {
            Self::Idle | Self::Walk | Self::Run => StateFlags::empty(),
            Self::Hurt => StateFlags::HIT_REACTION,
            Self::Jump => StateFlags::AIRBORNE,
            Self::AirKick => StateFlags::AIRBORNE | StateFlags::ATTACKING,
            Self::Punch1 | Self::Punch2 | Self::Shoot => StateFlags::ATTACKING,
        }
    }

    fn required() -> &'static [Self] {
        &[
            Self::Idle,
            Self::Walk,
            Self::Run,
            Self::Hurt,
            Self::Punch1,
            Self::Punch2,
            Self::AirKick,
            Self::Jump,
        ]
    }
}
