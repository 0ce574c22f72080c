//! Identifier word analysis — camelCase decomposition and English helpers.

/// Split a mixed-case identifier into lowercase words.
///
/// Word boundaries are lowercase→uppercase transitions and underscores:
/// `getUserName` → `["get", "user", "name"]`, `max_value` → `["max", "value"]`.
/// Runs of uppercase letters stay together (`parseHTTP` → `["parse", "http"]`).
pub fn split_identifier(identifier: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in identifier.chars() {
        if c == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev_lower = c.is_lowercase();
        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Conjugate an English verb to third person singular present tense.
///
/// Suffix rules only; irregular verbs come out wrong ("have" → "haves"),
/// which callers accept as a heuristic limitation.
pub fn third_person(verb: &str) -> String {
    if verb.ends_with('s')
        || verb.ends_with('x')
        || verb.ends_with('z')
        || verb.ends_with("ch")
        || verb.ends_with("sh")
    {
        format!("{}es", verb)
    } else if ends_with_consonant_y(verb) {
        format!("{}ies", &verb[..verb.len() - 1])
    } else {
        format!("{}s", verb)
    }
}

fn ends_with_consonant_y(verb: &str) -> bool {
    let mut chars = verb.chars().rev();
    if chars.next() != Some('y') {
        return false;
    }
    match chars.next() {
        Some(c) => !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'),
        None => false,
    }
}

/// Uppercase only the first character; the rest of the sentence is untouched.
pub fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Humanize a type or file-stem name for use in generated prose: split into
/// words, drop single-letter fragments, join with spaces.
/// `TcpSocket` → `"tcp socket"`.
pub fn humanize(name: &str) -> String {
    split_identifier(name)
        .into_iter()
        .filter(|w| w.len() > 1)
        .collect::<Vec<_>>()
        .join(" ")
}
