use anyhow::{Context, bail};
use core::str::FromStr;
use sapper_core::{Coord, Coord2};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Undo,
    Reset,
    Dump,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  r ROW COL   reveal a cell, or take the flag off a flagged one
  f ROW COL   flag a hidden cell
  u           undo the last move
  n           start a new game
  d           dump the board as JSON
  h           show this help
  q           quit";

fn parse_coords<'a>(mut args: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = args.next().context("missing row")?;
    let col = args.next().context("missing column")?;
    if args.next().is_some() {
        bail!("too many arguments");
    }
    let row: Coord = row.parse().with_context(|| format!("bad row {row:?}"))?;
    let col: Coord = col.parse().with_context(|| format!("bad column {col:?}"))?;
    Ok((row, col))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(words)?),
            "f" | "flag" => Self::Flag(parse_coords(words)?),
            "u" | "undo" => Self::Undo,
            "n" | "new" | "reset" => Self::Reset,
            "d" | "dump" => Self::Dump,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}, try \"h\""),
        };
        Ok(command)
    }
}
