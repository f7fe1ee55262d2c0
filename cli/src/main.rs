mod app_config;
mod chat;
mod play;
mod recommend;

use clap::{Parser, Subcommand, ValueEnum};
use games::tictactoe::BotKind;
use play::FirstPlayer;

#[derive(Parser)]
#[command(
    name = "games_cli",
    about = "Unbeatable tic-tac-toe, a rule-based chat assistant and a movie recommender"
)]
struct Args {
    /// Path to the YAML config file; defaults next to the working directory.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play tic-tac-toe against the bot.
    Play {
        /// Overrides the bot kind from the config file.
        #[arg(long, value_enum)]
        bot: Option<BotArg>,

        /// Who makes the first move.
        #[arg(long, value_enum)]
        first: Option<FirstArg>,
    },
    /// Talk to the rule-based chat assistant.
    Chat,
    /// Recommend movies by liked genres or by your own ratings.
    Recommend {
        /// Liked genre, repeatable.
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Your rating as TITLE=RATING, repeatable.
        #[arg(long = "rate")]
        ratings: Vec<String>,

        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BotArg {
    Random,
    Minimax,
}

impl From<BotArg> for BotKind {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Random => BotKind::Random,
            BotArg::Minimax => BotKind::Minimax,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Bot,
    Random,
}

impl From<FirstArg> for FirstPlayer {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Human => FirstPlayer::Human,
            FirstArg::Bot => FirstPlayer::Bot,
            FirstArg::Random => FirstPlayer::Random,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("GamesCli".to_string())
    } else {
        None
    };
    common::logger::init_logger(prefix);

    let config = app_config::get_config_manager(args.config.as_deref()).get_config()?;

    match args.command {
        Command::Play { bot, first } => {
            let bot_kind = bot.map(BotKind::from).unwrap_or(config.bot.kind);
            let first = first.map(FirstPlayer::from).unwrap_or(FirstPlayer::Human);
            play::run(bot_kind, first)?;
        }
        Command::Chat => chat::run(config.chat)?,
        Command::Recommend {
            genres,
            ratings,
            top,
        } => recommend::run(config.catalog, genres, ratings, top)?,
    }

    Ok(())
}
