use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use super::fakes::{FakeTranslator, StaticLexicons, StaticSource};
use crate::error::ConfigurationError;
use crate::language::Language::{self, English, German, Spanish};
use crate::pipeline::{Pipeline, PipelineOptions};
use crate::rank::rank;
use crate::types::NO_TRANSLATION;

fn german_source() -> StaticSource {
    StaticSource::default().with(German, &["haus", "auto", "buch"])
}

fn german_lexicons() -> StaticLexicons {
    StaticLexicons::default().with(
        German,
        English,
        &[
            ("haus", "house|home"),
            ("auto", "car"),
            ("buch", "book"),
        ],
    )
}

fn pipeline(
    source: &Arc<StaticSource>,
    lexicons: &Arc<StaticLexicons>,
    translator: &Arc<FakeTranslator>,
) -> Pipeline {
    Pipeline::new(
        source.clone(),
        lexicons.clone(),
        translator.clone(),
        PipelineOptions::default(),
    )
}

fn setup() -> (Arc<StaticSource>, Arc<StaticLexicons>, Arc<FakeTranslator>) {
    (
        Arc::new(german_source()),
        Arc::new(german_lexicons()),
        Arc::new(FakeTranslator::default()),
    )
}

#[tokio::test]
async fn test_top_one_is_haus() {
    let (source, lexicons, translator) = setup();
    let pipeline = pipeline(&source, &lexicons, &translator);

    let words = pipeline.top_words(German, 100).await;
    let translations = pipeline.translate_words(&words, German, English).await;
    let scores = pipeline.similarity_scores(&translations).await;
    let ranked = rank(scores.to_vec(), 1);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].word, "haus");
    assert!((ranked[0].score - 0.67).abs() < 0.01);
}

#[tokio::test]
async fn test_only_first_candidate_kept() {
    let (source, lexicons, translator) = setup();
    let pipeline = pipeline(&source, &lexicons, &translator);

    let words = pipeline.top_words(German, 100).await;
    let translations = pipeline.translate_words(&words, German, English).await;

    assert_eq!(translations.translation("haus"), Some("house"));
}

#[tokio::test]
async fn test_count_exceeding_pairs_returns_all() {
    let (source, lexicons, translator) = setup();
    let pipeline = pipeline(&source, &lexicons, &translator);

    let cards = pipeline.run(German, English, 10).await.unwrap();

    let words: Vec<_> = cards.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words, vec!["haus", "auto", "buch"]);
    assert!(cards.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(cards[0].translation, "house");
    assert_eq!(cards[0].meaning, "meaning(haus)");
    assert!(!cards[0].exact_match);
}

#[tokio::test]
async fn test_lexicon_miss_is_dropped() {
    let source = Arc::new(german_source());
    let lexicons = Arc::new(StaticLexicons::default().with(
        German,
        English,
        &[("haus", "house"), ("buch", "book")],
    ));
    let translator = Arc::new(FakeTranslator::default());
    let pipeline = pipeline(&source, &lexicons, &translator);

    let words = pipeline.top_words(German, 100).await;
    let translations = pipeline.translate_words(&words, German, English).await;
    assert_eq!(translations.present_len(), 2);
    assert_eq!(translations.translation("auto"), None);

    let scores = pipeline.similarity_scores(&translations).await;
    assert!(scores.iter().all(|pair| pair.word != "auto"));

    let cards = pipeline.run(German, English, 5).await.unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|card| card.word != "auto"));
    assert_eq!(translator.calls(), 2);
}

#[tokio::test]
async fn test_empty_source_yields_empty_result() {
    let source = Arc::new(StaticSource::default());
    let lexicons = Arc::new(german_lexicons());
    let translator = Arc::new(FakeTranslator::default());
    let pipeline = pipeline(&source, &lexicons, &translator);

    let cards = pipeline.run(German, English, 5).await.unwrap();

    assert!(cards.is_empty());
    // primary and fallback were both tried
    assert_eq!(source.calls(), 2);
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn test_falls_back_to_default_language() {
    let source = Arc::new(StaticSource::default().with(English, &["the", "and", "hotel"]));
    let (_, lexicons, translator) = setup();
    let pipeline = pipeline(&source, &lexicons, &translator);

    let words = pipeline.top_words(Spanish, 100).await;

    assert_eq!(words.as_slice(), ["the", "and", "hotel"]);
}

#[tokio::test]
async fn test_exact_match_and_tie_break() {
    let source = Arc::new(StaticSource::default().with(Spanish, &["taxi", "hotel", "perro"]));
    let lexicons = Arc::new(StaticLexicons::default().with(
        Spanish,
        German,
        &[("taxi", "Taxi"), ("hotel", "Hotel"), ("perro", "Hund")],
    ));
    let translator = Arc::new(FakeTranslator::default());
    let pipeline = pipeline(&source, &lexicons, &translator);

    let cards = pipeline.run(Spanish, German, 5).await.unwrap();

    let words: Vec<_> = cards.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words, vec!["taxi", "hotel", "perro"]);
    assert!(cards[0].exact_match && cards[1].exact_match);
    assert!(!cards[2].exact_match);
}

#[tokio::test]
async fn test_meaning_failure_uses_sentinel() {
    let (source, lexicons, _) = setup();
    let translator = Arc::new(FakeTranslator::default().failing("auto"));
    let pipeline = pipeline(&source, &lexicons, &translator);

    let cards = pipeline.run(German, English, 5).await.unwrap();

    let auto = cards.iter().find(|c| c.word == "auto").unwrap();
    assert_eq!(auto.meaning, NO_TRANSLATION);
    assert_eq!(cards.len(), 3);
}

#[tokio::test]
async fn test_slow_meaning_times_out_without_reordering() {
    let (source, lexicons, _) = setup();
    let translator = Arc::new(
        FakeTranslator::default()
            .delayed("haus", Duration::from_millis(300))
            .delayed("auto", Duration::from_millis(10))
            .delayed("buch", Duration::from_secs(30)),
    );
    let pipeline = Pipeline::new(
        source.clone(),
        lexicons.clone(),
        translator.clone(),
        PipelineOptions {
            timeout: Duration::from_secs(1),
            ..PipelineOptions::default()
        },
    );

    let started = Instant::now();
    let cards = pipeline.run(German, English, 5).await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(10));
    let words: Vec<_> = cards.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words, ["haus", "auto", "buch"]);
    assert_eq!(cards[0].meaning, "meaning(haus)");
    assert_eq!(cards[1].meaning, "meaning(auto)");
    assert_eq!(cards[2].meaning, NO_TRANSLATION);
}

#[tokio::test]
async fn test_repeated_runs_hit_caches() {
    let (source, lexicons, translator) = setup();
    let pipeline = pipeline(&source, &lexicons, &translator);

    let first = pipeline.run(German, English, 5).await.unwrap();
    let second = pipeline.run(German, English, 5).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(source.calls(), 1);
    assert_eq!(lexicons.loads(), 1);
    assert_eq!(translator.calls(), 3);
}

#[tokio::test]
async fn test_stage_caches_return_same_values() {
    let (source, lexicons, translator) = setup();
    let pipeline = pipeline(&source, &lexicons, &translator);

    let words_a = pipeline.top_words(German, 100).await;
    let words_b = pipeline.top_words(German, 100).await;
    assert_eq!(words_a, words_b);

    let translations_a = pipeline.translate_words(&words_a, German, English).await;
    let translations_b = pipeline.translate_words(&words_b, German, English).await;
    assert!(Arc::ptr_eq(&translations_a, &translations_b));

    let scores_a = pipeline.similarity_scores(&translations_a).await;
    let scores_b = pipeline.similarity_scores(&translations_b).await;
    assert!(Arc::ptr_eq(&scores_a, &scores_b));
}

#[tokio::test]
async fn test_separate_pipelines_are_deterministic() {
    let (source, lexicons, translator) = setup();

    let first = pipeline(&source, &lexicons, &translator)
        .run(German, English, 5)
        .await
        .unwrap();
    let second = pipeline(&source, &lexicons, &translator)
        .run(German, English, 5)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_buffer_is_requested_from_source() {
    let (source, lexicons, translator) = setup();
    let pipeline = pipeline(&source, &lexicons, &translator);

    pipeline.run(German, English, 5).await.unwrap();

    assert_eq!(source.last_count.load(Ordering::SeqCst), 100);
}

#[tokio::test]
async fn test_missing_lexicon_yields_empty_result() {
    let (source, lexicons, translator) = setup();
    let pipeline = pipeline(&source, &lexicons, &translator);

    let cards = pipeline.run(German, Spanish, 5).await.unwrap();

    assert!(cards.is_empty());
}

#[tokio::test]
async fn test_invalid_input_is_reported() {
    let (source, lexicons, translator) = setup();
    let pipeline = pipeline(&source, &lexicons, &translator);

    let err = pipeline.run_codes("de", "xx", 10).await.unwrap_err();
    assert_eq!(err, ConfigurationError::UnsupportedLanguage("xx".to_string()));

    for count in [0, 4, 101] {
        let err = pipeline.run(German, English, count).await.unwrap_err();
        assert!(matches!(err, ConfigurationError::CountOutOfRange { .. }));
    }

    assert_eq!(source.calls(), 0);
}

#[test]
fn test_options_from_config() {
    let mut config = cognate_config::Config::default();
    config.source.fallback_lang = "fr".to_string();
    config.network.concurrency = 0;

    let options = PipelineOptions::from_config(&config).unwrap();
    assert_eq!(options.fallback, Language::French);
    assert_eq!(options.concurrency, 1);

    config.source.fallback_lang = "klingon".to_string();
    assert!(PipelineOptions::from_config(&config).is_err());
}
