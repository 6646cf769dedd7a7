/// Combat tuning shared by every character and tunable at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Seconds a dash window stays armed after a directional release.
    /// The window only decays while no directional control is held.
    pub dash_window: f32,
    /// Horizontal speed multiplier applied while dashing.
    pub dash_multiplier: f32,
    /// Vertical velocity requested when a jump starts.
    pub jump_speed: f32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Upper bound on side-effect requests a single step can emit.
    pub const MAX_REQUESTS_PER_STEP: usize = 8;
    /// Upper bound on state transitions a single step can record.
    pub const MAX_TRANSITIONS_PER_STEP: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DASH_WINDOW: f32 = 0.15;
    pub const DEFAULT_DASH_MULTIPLIER: f32 = 2.0;
    pub const DEFAULT_JUMP_SPEED: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            dash_window: Self::DEFAULT_DASH_WINDOW,
            dash_multiplier: Self::DEFAULT_DASH_MULTIPLIER,
            jump_speed: Self::DEFAULT_JUMP_SPEED,
        }
    }

    pub fn with_dash_window(mut self, seconds: f32) -> Self {
        self.dash_window = seconds;
        self
    }

    pub fn with_jump_speed(mut self, speed: f32) -> Self {
        self.jump_speed = speed;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
