//! Line-oriented terminal front end.
//!
//! Commands, one per line:
//! `x y` click a square, `a N` toggle ability slot N, `r` restart, `q` quit.

use std::io::{self, BufRead, Write};

use moodeng_chess::game_state::board_types::Position;
use moodeng_chess::game_state::game_session::GameSession;
use moodeng_chess::utils::render_game_state::{Renderer, TextRenderer};

fn main() -> io::Result<()> {
    let mut session = GameSession::new();
    let mut renderer = TextRenderer::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    renderer.render(&session.snapshot());
    writeln!(stdout, "{}", renderer.frame)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["q"] | ["quit"] => break,
            ["r"] | ["restart"] => session.reset(),
            ["a", slot] => match slot.parse::<usize>() {
                Ok(slot) => {
                    if !session.select_ability_slot(slot) {
                        writeln!(stdout, "ability slot {slot} unavailable")?;
                    }
                }
                Err(_) => writeln!(stdout, "bad slot: {slot}")?,
            },
            [x, y] => match (x.parse::<i32>(), y.parse::<i32>()) {
                (Ok(x), Ok(y)) => {
                    let report = session.handle_click(Position::new(x, y));
                    for info in report
                        .info_lines
                        .iter()
                        .filter(|l| !l.starts_with("info string"))
                    {
                        writeln!(stdout, "{info}")?;
                    }
                }
                _ => writeln!(stdout, "bad square: {line}")?,
            },
            [] => continue,
            _ => writeln!(stdout, "commands: `x y`, `a N`, `r`, `q`")?,
        }

        renderer.render(&session.snapshot());
        writeln!(stdout, "{}", renderer.frame)?;
        stdout.flush()?;
    }

    Ok(())
}
