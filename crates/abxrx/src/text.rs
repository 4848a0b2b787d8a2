//! Case normalisation shared by the phenotype table and report adapters.

/// Upper-case the first character and lower-case the rest
/// (`"TETRACYCLINE"` -> `"Tetracycline"`).
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title-case every alphabetic run: a letter following a non-letter is
/// upper-cased, every other letter lower-cased (`"beta-lactam"` -> `"Beta-Lactam"`).
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }

    out
}
