use anyhow::{Context, bail};
use std::str::FromStr;
use tilesweep_core::{Coord, InputEvent};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Act(InputEvent),
    NewRound,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb {
            "q" | "quit" => Command::Quit,
            "n" | "new" => Command::NewRound,
            "r" | "reveal" => Command::Act(InputEvent::reveal(parse_coords(&mut words)?)),
            "f" | "flag" => Command::Act(InputEvent::toggle_flag(parse_coords(&mut words)?)),
            other => bail!("unknown command {other:?}, expected r, f, n or q"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?}");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<(Coord, Coord)> {
    let mut next = |axis: &str| -> anyhow::Result<Coord> {
        let word = words.next().with_context(|| format!("missing {axis} coordinate"))?;
        word.parse::<Coord>()
            .with_context(|| format!("invalid {axis} coordinate {word:?}"))
    };
    let x = next("x")?;
    let y = next("y")?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!(
            "r 3 4".parse::<Command>().unwrap(),
            Command::Act(InputEvent::reveal((3, 4)))
        );
        assert_eq!(
            "  flag 0 12 ".parse::<Command>().unwrap(),
            Command::Act(InputEvent::toggle_flag((0, 12)))
        );
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("new".parse::<Command>().unwrap(), Command::NewRound);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!("".parse::<Command>().is_err());
        assert!("r 1".parse::<Command>().is_err());
        assert!("r -1 2".parse::<Command>().is_err());
        assert!("f 1 2 3".parse::<Command>().is_err());
        assert!("dig 1 2".parse::<Command>().is_err());
    }
}
