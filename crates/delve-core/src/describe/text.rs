//! Small pure text helpers for prose assembly.

/// Choose "a" or "an" based on the following word.
pub fn an(word: &str) -> String {
    let Some(first_char) = word.chars().next() else {
        return "a".to_string();
    };

    if "aeiou".contains(first_char.to_ascii_lowercase()) {
        // Words starting with "u" that sound like "you" keep "a"
        if first_char.to_ascii_lowercase() == 'u' {
            let word_lower = word.to_lowercase();
            if word_lower.starts_with("uni") || word_lower.starts_with("use") {
                return format!("a {}", word);
            }
        }
        format!("an {}", word)
    } else {
        format!("a {}", word)
    }
}

/// Capitalize the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Capitalize every space-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pluralize a word using basic English rules.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{}es", word);
    }

    if word.ends_with('y') && word.len() > 1 {
        let before_y = word.chars().nth(word.len() - 2).unwrap_or('a');
        if !"aeiou".contains(before_y) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
    }

    format!("{}s", word)
}

/// Join clauses into one sentence body.
///
/// Two clauses get a bare "and"; three or more get an Oxford-comma join.
pub fn sentence_list(clauses: &[String]) -> String {
    match clauses {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}
