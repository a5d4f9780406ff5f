pub const WORD_PATTERN: &str = r"[a-zA-Z'’-]+";
pub const VOWELS: &str = "aeiou";
pub const SIBILANT_ENDINGS: &[&str] = &["ses", "hes", "xes"];

pub const INITIAL_BACKOFF_MS: u64 = 1000;
pub const MAX_BACKOFF_MS: u64 = 15000;
