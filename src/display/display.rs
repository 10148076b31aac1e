use chrono::{DateTime, Local};
use std::io::{self, Write};

use crate::breathing::technique::{Phase, Technique};

pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";
pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseColor {
    Green,
    Blue,
    Red,
}

impl PhaseColor {
    /// Case-sensitive prefix rule: "Inhale*" is green, "Exhale*" is red, everything else blue.
    pub fn for_phase(name: &str) -> Self {
        if name.starts_with("Inhale") {
            PhaseColor::Green
        } else if name.starts_with("Exhale") {
            PhaseColor::Red
        } else {
            PhaseColor::Blue
        }
    }

    pub(crate) fn ansi(&self) -> &'static str {
        match self {
            PhaseColor::Green => GREEN,
            PhaseColor::Blue => BLUE,
            PhaseColor::Red => RED,
        }
    }
}

/// The single overwritten status line for `phase`, without a trailing newline.
pub fn status_line(phase: &Phase, colored: bool) -> String {
    if colored {
        format!(
            "\r{}Phase: {} ({}s){}   ",
            PhaseColor::for_phase(phase.name).ansi(),
            phase.name,
            phase.display_seconds(),
            RESET
        )
    } else {
        format!("\rPhase: {} ({}s)   ", phase.name, phase.display_seconds())
    }
}

/// Title, numbered menu and the selection prompt. The prompt has no newline.
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Mindful Breathing Visualizer")?;
    for technique in Technique::ALL {
        writeln!(out, "{}. {}", technique.selector(), technique.name())?;
    }
    write!(out, "Select a technique (1-3): ")?;
    out.flush()
}

pub fn write_confirmation<W: Write>(
    out: &mut W,
    technique: Technique,
    started: DateTime<Local>,
) -> io::Result<()> {
    writeln!(
        out,
        "[{}] Starting {}...",
        started.format("%H:%M:%S"),
        technique.name()
    )?;
    writeln!(out, "Press Ctrl+C to stop.\n")?;
    out.flush()
}

/// Human-readable catalogue for `--list`.
pub fn write_listing<W: Write>(out: &mut W) -> io::Result<()> {
    for technique in Technique::ALL {
        writeln!(
            out,
            "{}. {} [{}] - {}s cycle",
            technique.selector(),
            technique.name(),
            technique.slug(),
            technique.cycle_duration().as_secs()
        )?;
        writeln!(out, "   {}", technique.description())?;
        let sequence: Vec<String> = technique
            .phases()
            .iter()
            .map(|p| format!("{} {}s", p.name, p.display_seconds()))
            .collect();
        writeln!(out, "   {}", sequence.join(" -> "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_color_mapping() {
        for name in ["Inhale", "Inhale Left", "Inhale Right"] {
            assert_eq!(PhaseColor::for_phase(name), PhaseColor::Green, "{name}");
        }
        for name in ["Exhale", "Exhale Right", "Exhale Left"] {
            assert_eq!(PhaseColor::for_phase(name), PhaseColor::Red, "{name}");
        }
        assert_eq!(PhaseColor::for_phase("Hold"), PhaseColor::Blue);
    }

    #[test]
    fn test_color_prefix_is_case_sensitive() {
        assert_eq!(PhaseColor::for_phase("inhale"), PhaseColor::Blue);
        assert_eq!(PhaseColor::for_phase("EXHALE"), PhaseColor::Blue);
        assert_eq!(PhaseColor::for_phase("Rest"), PhaseColor::Blue);
    }

    #[test]
    fn test_status_line_colored() {
        let line = status_line(&Phase::new("Exhale Right", 4000), true);
        assert_eq!(line, "\r\x1b[31mPhase: Exhale Right (4s)\x1b[0m   ");
    }

    #[test]
    fn test_status_line_plain() {
        let line = status_line(&Phase::new("Hold", 5000), false);
        assert_eq!(line, "\rPhase: Hold (5s)   ");
    }

    #[test]
    fn test_menu() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Box Breathing\n"));
        assert!(text.contains("2. Diaphragmatic Breathing\n"));
        assert!(text.contains("3. Alternate Nostril Breathing\n"));
        assert!(text.ends_with("Select a technique (1-3): "));
    }

    #[test]
    fn test_confirmation_is_timestamped() {
        let started = Local.with_ymd_and_hms(2024, 5, 1, 7, 30, 5).single().unwrap();
        let mut out = Vec::new();
        write_confirmation(&mut out, Technique::AlternateNostril, started).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "[07:30:05] Starting Alternate Nostril Breathing...\nPress Ctrl+C to stop.\n\n"
        );
    }

    #[test]
    fn test_listing_mentions_every_technique() {
        let mut out = Vec::new();
        write_listing(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Box Breathing [box-breathing] - 16s cycle"));
        assert!(text.contains("Inhale 5s -> Exhale 5s"));
        assert!(text.contains("3. Alternate Nostril Breathing [alternate-nostril] - 32s cycle"));
    }
}
