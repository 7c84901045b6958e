//! Location normalization.

/// Title-case a location the way stored cafe locations are written.
///
/// Every run of letters starts with an uppercase letter and continues in
/// lowercase. Any non-letter (space, hyphen, apostrophe, digit) ends a run, so
/// `"new york"` becomes `"New York"` and `"saint-malo"` becomes `"Saint-Malo"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
