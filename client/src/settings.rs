use clap::{Parser, ValueEnum};
use game_engine::game::{GameConfig, Sign};
use tic_tac_toe_ai::SearchConfig;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum SignArg {
    X,
    O,
}

impl From<SignArg> for Sign {
    fn from(value: SignArg) -> Self {
        match value {
            SignArg::X => Sign::X,
            SignArg::O => Sign::O,
        }
    }
}

/// Play tic-tac-toe against the computer.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Sign to play with; asked interactively when omitted. X moves first.
    #[arg(long, value_enum)]
    pub sign: Option<SignArg>,
    /// Use alpha-beta pruning in the search.
    #[arg(long)]
    pub pruning: bool,
    /// Let the search choose the computer's opening move instead of the corner.
    #[arg(long)]
    pub search_opening: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    sign: Option<Sign>,
    game: GameConfig,
    search: SearchConfig,
}

impl Settings {
    pub fn sign(&self) -> Option<Sign> {
        self.sign
    }

    pub fn game(&self) -> GameConfig {
        self.game
    }

    pub fn search(&self) -> SearchConfig {
        self.search
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        let mut game = GameConfig::default();
        if args.search_opening {
            game.opening_move = None;
        }
        Self {
            sign: args.sign.map(Sign::from),
            game,
            search: SearchConfig {
                pruning: args.pruning,
            },
        }
    }
}
