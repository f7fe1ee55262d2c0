use std::io::{self, BufRead, Write};

use common::{log, warn};
use games::tictactoe::{
    Board, BotKind, GameState, Mark, Outcome, PlayError, calculate_move,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstPlayer {
    Human,
    Bot,
    Random,
}

const HUMAN_MARK: Mark = Mark::X;
const BOT_MARK: Mark = Mark::O;

/// Runs one human-vs-bot game on stdin/stdout. The human is always X; who
/// opens depends on `first`.
pub fn run(bot_kind: BotKind, first: FirstPlayer) -> Result<(), String> {
    let bot_goes_first = match first {
        FirstPlayer::Human => false,
        FirstPlayer::Bot => true,
        FirstPlayer::Random => rand::random(),
    };

    let first_mark = if bot_goes_first { BOT_MARK } else { HUMAN_MARK };
    let mut state = GameState::new(first_mark);

    log!("Starting game: human is {}, bot is {} ({:?})", HUMAN_MARK, BOT_MARK, bot_kind);
    println!("You are {}. Cells are numbered 0-8, left to right, top to bottom.", HUMAN_MARK);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render(state.board()));

        if state.status() != Outcome::InProgress {
            break;
        }

        if state.current_mark() == BOT_MARK {
            let index = calculate_move(bot_kind, state.board_mut(), BOT_MARK)
                .map_err(|e| e.to_string())?;
            state.place_mark(index).map_err(|e| e.to_string())?;
            println!("Bot plays cell {}.", index);
            continue;
        }

        print!("Your move (0-8, q to quit): ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            println!("Input closed, leaving the game.");
            return Ok(());
        };
        let line = line.map_err(|e| e.to_string())?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            println!("Game abandoned.");
            return Ok(());
        }

        let Ok(index) = input.parse::<usize>() else {
            println!("Please enter a cell number between 0 and 8.");
            continue;
        };

        if index > 8 {
            println!("Please enter a cell number between 0 and 8.");
            continue;
        }

        match state.place_mark(index) {
            Ok(()) => {}
            Err(PlayError::IllegalMove(e)) => {
                warn!("Rejected move: {}", e);
                println!("Cell {} is taken, pick another one.", index);
            }
            Err(PlayError::GameFinished) => break,
        }
    }

    announce(&state);
    Ok(())
}

fn announce(state: &GameState) {
    match state.status() {
        Outcome::Win(mark) if mark == HUMAN_MARK => {
            println!("You win!");
        }
        Outcome::Win(_) => {
            println!("The bot wins!");
        }
        Outcome::Draw => {
            println!("It's a draw!");
        }
        Outcome::InProgress => {}
    }

    if let Some(line) = state.winning_line() {
        println!(
            "Winning line: cells {} {} {}.",
            line.cells[0], line.cells[1], line.cells[2]
        );
    }
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let base = row * 3;
        out.push_str(&format!(
            " {} | {} | {}\n",
            board.get(base),
            board.get(base + 1),
            board.get(base + 2)
        ));
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}
