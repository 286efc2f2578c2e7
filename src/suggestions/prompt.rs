// src/suggestions/prompt.rs
//! Prompt construction and parsing of generated phrase lists

pub const PHRASE_COUNT: usize = 8;
pub const MIN_PHRASE_CHARS: usize = 50;
pub const MAX_PHRASE_CHARS: usize = 100;

const CONTEXT_TRAITS: &str = "Worked well independently and on a team to solve problems. \
Served as a friendly, hardworking, and punctual employee. \
Organized and prioritized work to complete assignments in a timely, efficient manner.";

/// Placeholder shown in the overlay before anything is generated
pub const DEFAULT_GENERATED_TEXT: &str = "1. Organized and prioritized work to complete assignments in a timely, efficient manner. \
2. Worked well independently and on a team to solve problems. \
3. Served as a friendly, hardworking, and punctual employee. \
4. Worked as a productive and positive team member to design, code, test, report, and debug operations.";

/// Request part of the prompt, without any job context
pub fn base_prompt() -> String {
    format!(
        "Generate {} Professional and energetic CV phrases for Employment History section \
clearly labeling each section 1. 2. 3. 4. Make sure each generated phrase is at least {} \
and {} max characters",
        PHRASE_COUNT, MIN_PHRASE_CHARS, MAX_PHRASE_CHARS
    )
}

/// Full prompt for a job title
pub fn suggestion_prompt(job: &str) -> String {
    format!(
        "{} based on this context: Job Title: {}, {}",
        base_prompt(),
        job,
        CONTEXT_TRAITS
    )
}

pub fn phrase_within_bounds(phrase: &str) -> bool {
    let len = phrase.chars().count();
    (MIN_PHRASE_CHARS..=MAX_PHRASE_CHARS).contains(&len)
}

/// Split "1. foo 2. bar" (inline or one per line) into phrases.
///
/// Markers must count up from 1 and sit at a word boundary, so numbers inside
/// a phrase ("3.5 years") do not split it. Text before the first marker is
/// dropped. Unnumbered text comes back as a single phrase.
pub fn parse_numbered_phrases(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut markers: Vec<(usize, usize)> = Vec::new();
    let mut expected = 1usize;
    let mut i = 0;

    while i < bytes.len() {
        let at_boundary = i == 0 || bytes[i - 1].is_ascii_whitespace();
        if at_boundary && bytes[i].is_ascii_digit() {
            let digits_end = i + bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
            let is_marker = bytes.get(digits_end) == Some(&b'.')
                && bytes
                    .get(digits_end + 1)
                    .map_or(true, |b| b.is_ascii_whitespace())
                && text[i..digits_end].parse::<usize>() == Ok(expected);

            if is_marker {
                markers.push((i, digits_end + 1));
                expected += 1;
                i = digits_end + 1;
                continue;
            }
        }
        i += 1;
    }

    if markers.is_empty() {
        let trimmed = text.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    markers
        .iter()
        .enumerate()
        .filter_map(|(k, &(_, content_start))| {
            let end = markers.get(k + 1).map_or(text.len(), |next| next.0);
            let phrase = text[content_start..end].trim();
            (!phrase.is_empty()).then(|| phrase.to_string())
        })
        .collect()
}
