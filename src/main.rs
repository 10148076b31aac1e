use chrono::Local;
use clap::Parser;
use std::io::{self, Write};

mod breathing;
mod cli;
mod display;
mod error;
mod logging;

use breathing::technique::{Technique, TechniqueInfo};
use display::display::{write_confirmation, write_listing, write_menu};
use error::BreathingResult;

#[tokio::main(flavor = "current_thread")]
async fn main() -> BreathingResult<()> {
    let args = cli::Args::parse();
    logging::init_logging(args.verbose);

    let mut stdout = io::stdout().lock();

    if args.list {
        return list_techniques(&mut stdout, args.json);
    }

    let technique = match args.technique {
        Some(technique) => technique,
        None => {
            write_menu(&mut stdout)?;
            breathing::selector::read_selection(io::stdin().lock())
        }
    };

    tracing::info!(
        technique = technique.slug(),
        cycle_ms = technique.cycle_ms(),
        colored = !args.no_color,
        "starting session"
    );
    write_confirmation(&mut stdout, technique, Local::now())?;

    breathing::player::play(technique, !args.no_color, &mut stdout).await
}

fn list_techniques<W: Write>(out: &mut W, json: bool) -> BreathingResult<()> {
    if json {
        let infos: Vec<TechniqueInfo> =
            Technique::ALL.into_iter().map(TechniqueInfo::from).collect();
        serde_json::to_writer_pretty(&mut *out, &infos)?;
        writeln!(out)?;
    } else {
        write_listing(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_listing() {
        let mut out = Vec::new();
        list_techniques(&mut out, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let techniques = value.as_array().unwrap();
        assert_eq!(techniques.len(), 3);
        assert_eq!(techniques[0]["slug"], "box-breathing");
        assert_eq!(techniques[2]["phases"].as_array().unwrap().len(), 8);
        assert_eq!(techniques[2]["cycle_ms"], 32000);
    }

    #[test]
    fn test_plain_listing() {
        let mut out = Vec::new();
        list_techniques(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("2. Diaphragmatic Breathing [diaphragmatic] - 10s cycle"));
    }
}
