// Round constants
pub const MAX_ATTEMPTS: u32 = 12;
pub const WIN_REWARD: u32 = 3;
pub const DEFAULT_LEXICON: &str = "french";
pub const MASK_PLACEHOLDER: char = '*';

// Level constants
pub const MIN_GAMES_FOR_LEVEL: u32 = 3;
pub const LARGE_SAMPLE_GAMES: u32 = 10;
pub const SMALL_SAMPLE_SCALE: [f64; 4] = [0.25, 0.50, 0.75, 1.0];
pub const LARGE_SAMPLE_SCALE: [f64; 5] = [0.20, 0.40, 0.60, 0.90, 1.0];

// Player name constraints
pub const MAX_NAME_LEN: usize = 16;

// Save system constants
pub const DATA_DIR_NAME: &str = ".hangman";
pub const CONFIG_FILE: &str = "config.json";
pub const WORDS_FILE: &str = "words.json";
pub const PLAYERS_DIR: &str = "players";
pub const SAVE_VERSION: u32 = 1;
