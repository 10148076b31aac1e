use std::io::Write;
use tokio::time::sleep;

use super::technique::Technique;
use crate::display::display::status_line;
use crate::error::BreathingResult;

/// Cycle through the technique's phases forever, overwriting one status line per phase.
///
/// Only returns when writing to `out` fails; otherwise it runs until the process is interrupted.
pub async fn play<W: Write>(
    technique: Technique,
    colored: bool,
    out: &mut W,
) -> BreathingResult<()> {
    let mut cycles: u64 = 0;

    loop {
        for phase in technique.phases() {
            tracing::debug!(phase = phase.name, duration_ms = phase.duration_ms, "phase started");
            write!(out, "{}", status_line(phase, colored))?;
            out.flush()?;

            sleep(phase.duration()).await;
        }

        cycles += 1;
        tracing::debug!(technique = technique.slug(), cycles, "cycle complete");
    }
}
