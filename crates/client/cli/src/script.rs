//! Scripted controller input.
//!
//! A tape is a RON list of segments. Each segment holds its controls for a
//! number of steps; a segment without controls holds nothing.
//!
//! ```ron
//! // walk up to the enemy, then punch twice
//! [
//!     (steps: 40, controls: [Right]),
//!     (steps: 1, controls: [Attack]),
//!     (steps: 3),
//!     (steps: 1, controls: [Attack]),
//! ]
//! ```
//!
//! A control counts as pressed on the first step it is held after a step in
//! which it was not.
use std::path::Path;

use anyhow::{Context, Result};
use brawl_core::{Control, RawInput};
use brawl_runtime::InputSource;
use serde::Deserialize;

/// Tape the simulator falls back to without `BRAWL_SCRIPT`.
pub const DEMO: &str = "\
[
    // close in on the first enemy
    (steps: 60, controls: [Right]),
    // three-hit string
    (steps: 1, controls: [Attack]),
    (steps: 4),
    (steps: 1, controls: [Attack]),
    (steps: 20),
    (steps: 1, controls: [Attack]),
    (steps: 30),
    (steps: 1, controls: [Attack]),
    (steps: 4),
    (steps: 1, controls: [Attack]),
    (steps: 30),
    (steps: 1, controls: [Attack]),
    (steps: 4),
    (steps: 1, controls: [Attack]),
    // hop and kick
    (steps: 1, controls: [Jump]),
    (steps: 6),
    (steps: 1, controls: [Attack]),
    (steps: 40),
]
";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct Segment {
    steps: u32,
    #[serde(default)]
    controls: Vec<Control>,
}

/// Replays a parsed tape one step at a time. Holds nothing once exhausted.
#[derive(Clone, Debug, Default)]
pub struct InputScript {
    segments: Vec<Segment>,
    segment: usize,
    remaining: u32,
    current: Vec<Control>,
    previous: Vec<Control>,
}

impl InputScript {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse input script {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let segments: Vec<Segment> =
            ron::from_str(content).context("Input tape is not a list of segments")?;
        Ok(Self {
            segments,
            ..Self::default()
        })
    }

    /// Total steps covered by the tape.
    pub fn len(&self) -> u32 {
        self.segments.iter().map(|segment| segment.steps).sum()
    }

    fn advance(&mut self) {
        self.previous.clone_from(&self.current);
        while self.remaining == 0 {
            let Some(segment) = self.segments.get(self.segment) else {
                self.current.clear();
                return;
            };
            self.segment += 1;
            self.remaining = segment.steps;
            self.current.clone_from(&segment.controls);
        }
        self.remaining -= 1;
    }
}

impl RawInput for InputScript {
    fn held(&self, control: Control) -> bool {
        self.current.contains(&control)
    }

    fn pressed(&self, control: Control) -> bool {
        self.current.contains(&control) && !self.previous.contains(&control)
    }
}

impl InputSource for InputScript {
    fn begin_step(&mut self) {
        self.advance();
    }
}
