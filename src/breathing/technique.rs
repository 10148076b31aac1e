use clap::ValueEnum;
use serde::Serialize;
use std::time::Duration;

/// One named, timed segment of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub name: &'static str,
    pub duration_ms: u64,
}

impl Phase {
    /// Built-in phases only; a zero duration fails at compile time.
    pub const fn new(name: &'static str, duration_ms: u64) -> Self {
        assert!(duration_ms > 0, "phase duration must be positive");
        Self { name, duration_ms }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Whole seconds shown to the user (truncating).
    pub fn display_seconds(&self) -> u64 {
        self.duration_ms / 1000
    }
}

const BOX_PHASES: &[Phase] = &[
    Phase::new("Inhale", 4000),
    Phase::new("Hold", 4000),
    Phase::new("Exhale", 4000),
    Phase::new("Hold", 4000),
];

const DIAPHRAGMATIC_PHASES: &[Phase] = &[Phase::new("Inhale", 5000), Phase::new("Exhale", 5000)];

const ALTERNATE_NOSTRIL_PHASES: &[Phase] = &[
    Phase::new("Inhale Left", 4000),
    Phase::new("Hold", 4000),
    Phase::new("Exhale Right", 4000),
    Phase::new("Hold", 4000),
    Phase::new("Inhale Right", 4000),
    Phase::new("Hold", 4000),
    Phase::new("Exhale Left", 4000),
    Phase::new("Hold", 4000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Technique {
    #[default]
    #[value(name = "box-breathing", alias = "box")]
    Box,
    #[value(name = "diaphragmatic")]
    Diaphragmatic,
    #[value(name = "alternate-nostril")]
    AlternateNostril,
}

impl Technique {
    /// Menu order.
    pub const ALL: [Technique; 3] = [
        Technique::Box,
        Technique::Diaphragmatic,
        Technique::AlternateNostril,
    ];

    pub fn phases(&self) -> &'static [Phase] {
        match self {
            Technique::Box => BOX_PHASES,
            Technique::Diaphragmatic => DIAPHRAGMATIC_PHASES,
            Technique::AlternateNostril => ALTERNATE_NOSTRIL_PHASES,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Technique::Box => "Box Breathing",
            Technique::Diaphragmatic => "Diaphragmatic Breathing",
            Technique::AlternateNostril => "Alternate Nostril Breathing",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Technique::Box => "box-breathing",
            Technique::Diaphragmatic => "diaphragmatic",
            Technique::AlternateNostril => "alternate-nostril",
        }
    }

    /// The menu number typed at the prompt.
    pub fn selector(&self) -> &'static str {
        match self {
            Technique::Box => "1",
            Technique::Diaphragmatic => "2",
            Technique::AlternateNostril => "3",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Technique::Box => {
                "Equal duration phases (4-4-4-4) for focus and stress relief."
            }
            Technique::Diaphragmatic => {
                "Deep belly breathing (5-5) for maximum oxygen intake and relaxation."
            }
            Technique::AlternateNostril => {
                "Balancing technique (Nadi Shodhana) using alternate nostrils."
            }
        }
    }

    pub fn cycle_ms(&self) -> u64 {
        self.phases().iter().map(|p| p.duration_ms).sum()
    }

    pub fn cycle_duration(&self) -> Duration {
        Duration::from_millis(self.cycle_ms())
    }
}

/// Serializable view of a technique for `--list --json`.
#[derive(Debug, Serialize)]
pub struct TechniqueInfo {
    pub selector: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cycle_ms: u64,
    pub phases: &'static [Phase],
}

impl From<Technique> for TechniqueInfo {
    fn from(technique: Technique) -> Self {
        Self {
            selector: technique.selector(),
            slug: technique.slug(),
            name: technique.name(),
            description: technique.description(),
            cycle_ms: technique.cycle_ms(),
            phases: technique.phases(),
        }
    }
}
