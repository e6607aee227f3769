use clap::Parser;
use sapper_core::GameState;
use std::io::{BufRead, Write};

use command::{Command, HELP};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut game = GameState::with_seed(seed);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "{HELP}\n\n{}", render::board(&game))?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "error: {err:#}")?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        match command {
            Command::Reveal(coords) => {
                if !game.reveal(coords).has_update() {
                    writeln!(stdout, "nothing to reveal at {coords:?}")?;
                    continue;
                }
            }
            Command::Flag(coords) => {
                if !game.flag(coords).has_update() {
                    writeln!(stdout, "cannot flag {coords:?}")?;
                    continue;
                }
            }
            Command::Undo => {
                if !game.undo().has_update() {
                    writeln!(stdout, "nothing to undo")?;
                    continue;
                }
            }
            Command::Reset => game.reset(),
            Command::Dump => {
                writeln!(stdout, "{}", render::dump(&game)?)?;
                continue;
            }
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }

        writeln!(stdout, "{}", render::board(&game))?;
    }

    Ok(())
}
