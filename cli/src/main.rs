use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use tilesweep_core::{CellCount, Coord, GameConfig, GameEvent, HazardPlacer, RoundController};

use command::Command;

mod command;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum Preset {
    /// 9x9 with 10 hazards
    Beginner,
    /// 16x16 with 40 hazards
    Intermediate,
    /// 30x16 with 99 hazards
    Expert,
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => GameConfig::beginner(),
            Preset::Intermediate => GameConfig::intermediate(),
            Preset::Expert => GameConfig::expert(),
        }
    }
}

/// Reveal every safe cell without stepping on a hazard.
///
/// Commands, one per line: `r X Y` reveals, `f X Y` toggles a flag, `n` starts over, `q` quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board to start from, the explicit size flags override it
    #[arg(short, long, value_enum, default_value_t = Preset::Expert)]
    preset: Preset,

    /// Grid width
    #[arg(short = 'W', long)]
    width: Option<Coord>,

    /// Grid height
    #[arg(short = 'H', long)]
    height: Option<Coord>,

    /// Hazard count, must be less than width * height
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let base = GameConfig::from(self.preset);
        let size = (
            self.width.unwrap_or(base.size.0),
            self.height.unwrap_or(base.size.1),
        );
        let hazards = self.mines.unwrap_or(base.hazards);
        GameConfig::new(size, hazards).with_context(|| {
            format!("cannot fit {hazards} hazards on a {}x{} grid", size.0, size.1)
        })
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = args.config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let round = RoundController::new(config, seed)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(round, stdin.lock(), &mut stdout.lock())
}

/// Reads commands until `q` or end of input, redrawing after every change.
fn run<P: HazardPlacer>(
    mut round: RoundController<P>,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    render::draw(&round, out)?;
    let mut events: Vec<GameEvent> = Vec::new();

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let input = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::NewRound) => {
                round.restart();
                render::draw(&round, out)?;
                continue;
            }
            Ok(Command::Act(input)) => input,
            Err(err) => {
                writeln!(out, "error: {err:#}")?;
                continue;
            }
        };

        events.clear();
        let outcome = round.handle_input(input, &mut events)?;
        log::debug!("{:?} -> {:?}", input, outcome);
        for event in &events {
            writeln!(out, "{}", render::cue(event))?;
        }
        if outcome.has_update() {
            render::draw(&round, out)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilesweep_core::PresetPlacer;

    fn play(script: &str) -> String {
        let config = GameConfig::new((3, 3), 1).unwrap();
        let round = RoundController::with_placer(config, PresetPlacer::new([(2, 2)]), 0).unwrap();
        let mut out = Vec::new();
        run(round, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plays_a_winning_round() {
        let output = play("f 2 2\nr 0 0\nq\nr 1 1\n");

        assert!(output.contains("~ flag planted at (2, 2)"));
        assert!(output.contains("~ swoosh (0, 0), 8 cells"));
        assert!(output.contains("~ fanfare"));
        assert!(output.contains("won, reveal any cell to play again"));
        assert!(!output.contains("(1, 1)"));
    }

    #[test]
    fn single_cell_reveal_clicks() {
        let output = play("r 2 1\n");

        assert!(output.contains("~ click (2, 1)"));
        assert!(!output.contains("swoosh"));
        assert!(output.contains(" 1 ##1\n"));
        assert!(output.ends_with("playing | hazards left: 1\n"));
    }

    #[test]
    fn reports_bad_commands_and_ignores_outside_cells() {
        let output = play("dance\nr 7 7\n\nr 2 2\n");

        assert!(output.contains("error: unknown command"));
        assert!(output.contains("~ BOOM at (2, 2)"));
        assert!(output.contains("lost, reveal any cell to play again"));
        // initial draw, then one redraw for the loss
        assert_eq!(output.matches("hazards left").count(), 2);
    }

    #[test]
    fn config_overrides_preset() {
        let args = Args::parse_from(["tilesweep", "-p", "beginner", "-W", "12", "-m", "20"]);

        assert_eq!(args.config().unwrap(), GameConfig::new((12, 9), 20).unwrap());
        assert_eq!(
            Args::parse_from(["tilesweep"]).config().unwrap(),
            GameConfig::expert()
        );
        assert!(Args::parse_from(["tilesweep", "-W", "2", "-H", "2", "-m", "4"])
            .config()
            .is_err());
    }

    #[test]
    fn new_round_command_redraws_hidden_board() {
        let output = play("r 0 1\nn\n");

        assert!(output.contains("~ swoosh (0, 1), 8 cells"));
        assert!(output.ends_with("   012\n 0 ###\n 1 ###\n 2 ###\nplaying | hazards left: 1\n"));
    }
}
