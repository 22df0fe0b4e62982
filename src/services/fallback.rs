//! Fallback matcher — deterministic keyword answers from school data.
//!
//! DESIGN
//! ======
//! Case-insensitive substring matching against a fixed ordered rule list,
//! first match wins. Intentionally not NLP: no scoring, no fuzzy matching,
//! just an ordered scan so answers stay predictable when the model is down.

use crate::school::SchoolInfo;

const PRICE_KEYWORDS: &[&str] = &["цена", "цены", "стоимость", "стоит", "прайс", "price"];
const SCHEDULE_KEYWORDS: &[&str] = &["распис", "график", "занят", "schedule"];
const COURSE_KEYWORDS: &[&str] = &["язык", "курс", "уровен", "уровн"];
const FORMAT_KEYWORDS: &[&str] = &["онлайн", "офлайн", "формат", "online", "offline"];

const GENERIC_ANSWER: &str = "Напиши язык и уровень — помогу выбрать курс.";

/// Produce a local answer for `message`. Pure and deterministic: the same
/// message against the same school data always yields the same text.
#[must_use]
pub fn answer(school: &SchoolInfo, message: &str) -> String {
    let m = message.to_lowercase();

    if contains_any(&m, PRICE_KEYWORDS) {
        return school.render_price_list();
    }
    if contains_any(&m, SCHEDULE_KEYWORDS) {
        return school.render_schedule();
    }
    if contains_any(&m, COURSE_KEYWORDS) || mentions_language(school, &m) {
        return school.render_courses();
    }
    if contains_any(&m, FORMAT_KEYWORDS) {
        return school.render_formats();
    }

    GENERIC_ANSWER.to_string()
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

/// Match inflected language names ("английского", "немецким") by checking the
/// stem of each configured course name.
fn mentions_language(school: &SchoolInfo, message: &str) -> bool {
    school
        .languages
        .iter()
        .any(|course| message.contains(&language_stem(&course.name)))
}

/// Lowercased course name with the (typically inflected) last two characters
/// trimmed, keeping at least four characters.
fn language_stem(name: &str) -> String {
    let lower = name.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    let keep = chars.len().saturating_sub(2).max(4).min(chars.len());
    chars[..keep].iter().collect()
}

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;
