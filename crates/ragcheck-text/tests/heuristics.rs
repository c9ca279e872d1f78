use ragcheck_text::{extract_score, normalize, split_sentences, truncate_chars, word_count};

#[test]
fn normalize_lowercases_and_collapses_whitespace() {
    assert_eq!(normalize("  Hello   WORLD \t again\n"), "hello world again");
}

#[test]
fn normalize_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \n\t "), "");
}

#[test]
fn word_count_splits_on_whitespace() {
    assert_eq!(word_count("one two  three"), 3);
    assert_eq!(word_count(""), 0);
}

#[test]
fn split_on_period_and_question_mark() {
    let sentences = split_sentences("Paris is the capital. Is it big? It has 2 million people.");
    assert_eq!(
        sentences,
        vec![
            "Paris is the capital.",
            "Is it big?",
            "It has 2 million people.",
        ]
    );
}

#[test]
fn split_keeps_single_letter_abbreviations_together() {
    let sentences = split_sentences("Use tools e.g. hammers and saws. They help.");
    assert_eq!(
        sentences,
        vec!["Use tools e.g. hammers and saws.", "They help."]
    );
}

#[test]
fn split_keeps_honorifics_together() {
    let sentences = split_sentences("Dr. Smith arrived. She was late.");
    assert_eq!(sentences, vec!["Dr. Smith arrived.", "She was late."]);
}

#[test]
fn split_drops_empty_fragments() {
    assert_eq!(split_sentences(""), Vec::<String>::new());
    assert_eq!(split_sentences("   "), Vec::<String>::new());
    assert_eq!(split_sentences("One sentence only"), vec!["One sentence only"]);
}

#[test]
fn extract_score_finds_decimals() {
    assert_eq!(extract_score("0.95"), 0.95);
    assert_eq!(extract_score("Score: 0.7 out of 1.0"), 0.7);
    assert_eq!(extract_score("1.0"), 1.0);
    assert_eq!(extract_score("1"), 1.0);
    assert_eq!(extract_score("0"), 0.0);
}

#[test]
fn extract_score_defaults_to_zero() {
    assert_eq!(extract_score(""), 0.0);
    assert_eq!(extract_score("no numbers here"), 0.0);
}

#[test]
fn extract_score_takes_first_match() {
    // Multi-number answers resolve to the first match.
    assert_eq!(extract_score("between 0.4 and 0.6"), 0.4);
}

#[test]
fn truncate_respects_char_boundaries() {
    assert_eq!(truncate_chars("hello", 3), "hel");
    assert_eq!(truncate_chars("hello", 10), "hello");
    // Multibyte characters count as one each.
    assert_eq!(truncate_chars("héllo", 2), "hé");
}
