// Embedded candidate word list
//
// The stock game ships a single word, matching the picture it reveals.

/// Default candidate words for the round draw
pub const DEFAULT_WORDS: &[&str] = &["ovo de páscoa"];

/// Number of words in `DEFAULT_WORDS`
pub const DEFAULT_WORDS_COUNT: usize = 1;
