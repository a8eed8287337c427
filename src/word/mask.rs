//! Initial reveal mask for a secret word.

/// Replace every alphabetic character of `word` with `placeholder`.
///
/// Non-alphabetic characters pass through unchanged and are returned as the
/// word's symbols (distinct, in order of first appearance).
pub fn build_mask(word: &str, placeholder: char) -> (String, Vec<char>) {
    let mut mask = String::with_capacity(word.len());
    let mut symbols = Vec::new();
    for c in word.chars() {
        if c.is_alphabetic() {
            mask.push(placeholder);
        } else {
            mask.push(c);
            if !symbols.contains(&c) {
                symbols.push(c);
            }
        }
    }
    (mask, symbols)
}
