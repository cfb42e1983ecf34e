use std::fmt::Write;

use cognate_core::Flashcard;
use cognate_core::language::Language;

pub fn render_json(cards: &[Flashcard]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}

/// One line per card, best first
pub fn render_text(cards: &[Flashcard], learn: Language, native: Language) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Flashcards {} -> {}", native.name(), learn.name());

    if cards.is_empty() {
        out.push_str("No words found.\n");
        return out;
    }

    for (i, card) in cards.iter().enumerate() {
        let similarity = if card.exact_match {
            "exact match".to_string()
        } else {
            format!("{:.2}", card.score)
        };

        let _ = writeln!(
            out,
            "{:>3}. {} | {} | {} | {}",
            i + 1,
            card.word,
            card.translation,
            similarity,
            card.meaning
        );
    }

    out
}

pub fn render_languages() -> String {
    Language::ALL
        .iter()
        .map(|lang| format!("{}  {}\n", lang.code(), lang.name()))
        .collect()
}
