// src/domain/article/preview.rs

const BOUNDARIES: [char; 2] = [' ', '\n'];

/// Cut `content` at the last space or newline found within its first
/// `n_characters + 1` characters.
///
/// The extra character of lookahead lets a boundary sitting right after the
/// requested length still be used. Returns an empty string when the window
/// has no boundary at all.
pub fn short_introduction(content: &str, n_characters: usize) -> &str {
    let window = n_characters.saturating_add(1);
    let cut = content
        .char_indices()
        .take(window)
        .filter(|(_, c)| BOUNDARIES.contains(c))
        .map(|(idx, _)| idx)
        .last();

    match cut {
        Some(idx) => content[..idx].trim_end_matches(BOUNDARIES),
        None => "",
    }
}
