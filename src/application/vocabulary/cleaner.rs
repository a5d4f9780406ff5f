fn is_joiner(ch: char) -> bool {
    matches!(ch, '\'' | '’' | '-')
}

/// Keeps letters, plus apostrophes and hyphens that sit strictly inside the
/// token. Positions are counted in characters of the original token, so a
/// leading or trailing joiner is dropped outright rather than trimmed.
pub fn clean(token: &str) -> String {
    let last = token.chars().count().saturating_sub(1);
    token
        .chars()
        .enumerate()
        .filter(|&(i, ch)| ch.is_alphabetic() || (is_joiner(ch) && i > 0 && i < last))
        .map(|(_, ch)| ch)
        .collect()
}
