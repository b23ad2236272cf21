use crate::pipeline::clean::clean_token;
use crate::pipeline::national::strip_international_prefix;

const SEPARATORS: [&str; 3] = [";", "//", "|"];
const DELIMITER: char = ',';

const AREA_CODE_DIGITS: std::ops::RangeInclusive<usize> = 2..=3;
const SUBSCRIBER_DIGITS: std::ops::RangeInclusive<usize> = 6..=7;
const COMPLETE_DIGITS: std::ops::RangeInclusive<usize> = 8..=10;

/// Splits a raw cell into candidate number strings.
///
/// Tokens may repeat; overlapping readings are collapsed by the aggregator.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut normalized = raw.to_string();
    for separator in SEPARATORS {
        normalized = normalized.replace(separator, ",");
    }

    let mut tokens = Vec::new();
    for segment in normalized.split(DELIMITER) {
        let segment = segment.trim();
        if !has_digit(segment) {
            continue;
        }
        if segment.contains(char::is_whitespace) {
            tokenize_spaced(segment, &mut tokens);
        } else {
            tokens.push(segment.to_string());
        }
    }
    tokens
}

// Area code + subscriber pairs win; complete pieces stand alone; whatever is left over
// between them is treated as one number typed with spaces.
fn tokenize_spaced(segment: &str, tokens: &mut Vec<String>) {
    let pieces: Vec<&str> = segment.split_whitespace().collect();
    let mut leftover: Vec<&str> = Vec::new();

    let mut idx = 0;
    while idx < pieces.len() {
        let piece = pieces[idx];
        if let Some(next) = pieces.get(idx + 1) {
            if is_area_code(piece) && is_subscriber(next) {
                flush_leftover(&mut leftover, tokens);
                tokens.push(format!("{piece}{next}"));
                idx += 2;
                continue;
            }
        }

        if is_complete_number(piece) {
            flush_leftover(&mut leftover, tokens);
            tokens.push(piece.to_string());
        } else if has_digit(piece) {
            leftover.push(piece);
        } else {
            flush_leftover(&mut leftover, tokens);
        }
        idx += 1;
    }
    flush_leftover(&mut leftover, tokens);
}

fn flush_leftover(leftover: &mut Vec<&str>, tokens: &mut Vec<String>) {
    if leftover.is_empty() {
        return;
    }
    tokens.push(leftover.concat());
    leftover.clear();
}

fn has_digit(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_digit())
}

fn digit_group_len(value: &str) -> Option<usize> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Some(value.len())
    } else {
        None
    }
}

fn is_area_code(piece: &str) -> bool {
    digit_group_len(piece).is_some_and(|len| AREA_CODE_DIGITS.contains(&len))
}

fn is_subscriber(piece: &str) -> bool {
    digit_group_len(piece).is_some_and(|len| SUBSCRIBER_DIGITS.contains(&len))
}

fn is_complete_number(piece: &str) -> bool {
    let Some(cleaned) = clean_token(piece) else {
        return false;
    };
    COMPLETE_DIGITS.contains(&strip_international_prefix(&cleaned).len())
}
