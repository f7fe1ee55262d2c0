use std::io::{self, BufRead, Write};

use games::chatbot::{ChatRules, Responder};

/// Chat REPL: reads lines until a farewell word or end of input.
pub fn run(rules: ChatRules) -> Result<(), String> {
    let responder = Responder::new(rules);

    println!("Chat started. Say 'bye' to leave.");
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        let input = line.trim();
        if input.is_empty() {
            prompt()?;
            continue;
        }

        println!("Bot: {}", responder.respond(input));

        if responder.is_farewell(input) {
            return Ok(());
        }

        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<(), String> {
    print!("You: ");
    io::stdout().flush().map_err(|e| e.to_string())
}
