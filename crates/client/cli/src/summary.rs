//! Encounter bookkeeping for the end-of-run report.
use std::collections::BTreeMap;
use std::fmt;

use brawl_core::{BodyId, TransitionCause};
use brawl_runtime::{Arena, ArenaEvent, StepReport};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyTally {
    pub transitions: usize,
    pub hits_taken: usize,
    pub combos: usize,
}

/// Running totals over every step of an encounter.
#[derive(Clone, Debug, Default)]
pub struct Encounter {
    pub steps: u64,
    pub tallies: BTreeMap<BodyId, BodyTally>,
    /// Bodies destroyed, with the step they went down on.
    pub destroyed: Vec<(BodyId, u64)>,
    /// `(body, health)` of enemies still in play when the run ended.
    pub survivors: Vec<(BodyId, u32)>,
}

impl Encounter {
    pub fn record(&mut self, report: &StepReport) {
        self.steps = report.step + 1;
        for event in &report.events {
            let tally = self.tallies.entry(event.body()).or_default();
            match event {
                ArenaEvent::StateChanged { cause, .. } => {
                    tally.transitions += 1;
                    if *cause == TransitionCause::Combo {
                        tally.combos += 1;
                    }
                }
                ArenaEvent::HitTaken { .. } => tally.hits_taken += 1,
                ArenaEvent::Destroyed { body } => self.destroyed.push((*body, report.step)),
            }
        }
    }

    pub fn finish(&mut self, arena: &Arena) {
        self.survivors = arena
            .enemies()
            .iter()
            .map(|enemy| (enemy.body(), enemy.runtime().health()))
            .collect();
    }
}

impl fmt::Display for Encounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "encounter finished after {} steps", self.steps)?;
        for (body, tally) in &self.tallies {
            writeln!(
                f,
                "  {body}: {} transitions, {} hits taken, {} combos",
                tally.transitions, tally.hits_taken, tally.combos
            )?;
        }
        for (body, step) in &self.destroyed {
            writeln!(f, "  {body} defeated on step {step}")?;
        }
        for (body, health) in &self.survivors {
            writeln!(f, "  {body} still standing with {health} health")?;
        }
        Ok(())
    }
}
