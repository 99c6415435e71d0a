//! Profanity masking for chirp bodies.

/// Words that are masked wherever they appear as a whole token.
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement for a masked token.
pub const MASK: &str = "****";

/// Mask every denylisted token in `body`.
///
/// The body is split on runs of whitespace, each token is compared
/// case-insensitively against [`PROFANE_WORDS`], and the tokens are joined
/// back with single spaces. Tokens with attached punctuation ("fornax!") are
/// not matches. Leading, trailing and repeated whitespace does not survive.
pub fn clean_chirp(body: &str) -> String {
    body.split_whitespace()
        .map(|word| if is_profane(word) { MASK } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_profane(word: &str) -> bool {
    let lowered = word.to_lowercase();
    PROFANE_WORDS.iter().any(|p| *p == lowered)
}
