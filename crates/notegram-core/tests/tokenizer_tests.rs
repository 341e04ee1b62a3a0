use notegram_core::config::AnalysisConfig;
use notegram_core::tokenizer::Tokenizer;
use rstest::rstest;

fn default_tokenizer() -> Tokenizer {
    Tokenizer::new(&AnalysisConfig::default())
}

#[test]
fn stopwords_are_dropped() {
    let t = default_tokenizer();
    assert_eq!(t.tokenize("Shampoo AND Groom"), vec!["shampoo", "groom"]);
}

#[rstest]
#[case("", vec![])]
#[case("   \t  ", vec![])]
#[case("!!! --- ???", vec![])]
#[case("Wash&Dry", vec!["wash", "dry"])]
#[case("one,two;three", vec!["one", "two", "three"])]
#[case("$5 off coupon", vec!["$5", "off", "coupon"])]
#[case("café", vec!["caf"])]
#[case("Groom CC small dog", vec!["groom", "small", "dog"])]
#[case("nail trim + teeth", vec!["nail", "trim", "teeth"])]
fn tokenize_cases(#[case] input: &str, #[case] expected: Vec<&str>) {
    let t = default_tokenizer();
    assert_eq!(t.tokenize(input), expected);
}

#[test]
fn tokens_keep_left_to_right_order() {
    let t = default_tokenizer();
    assert_eq!(
        t.tokenize("deep clean, then dry, then brush"),
        vec!["deep", "clean", "then", "dry", "then", "brush"]
    );
}

#[test]
fn extra_symbols_follow_config() {
    let config = AnalysisConfig {
        extra_symbols: "#".to_string(),
        ..Default::default()
    };
    let t = Tokenizer::new(&config);
    // '#' now joins tokens, '$' no longer does.
    assert_eq!(t.tokenize("Suite #12 for $20"), vec!["suite", "#12", "20"]);
}

#[test]
fn stopword_list_entries_are_trimmed_and_lowercased() {
    let config = AnalysisConfig {
        stopwords: " AND , , The ".to_string(),
        ..Default::default()
    };
    let t = Tokenizer::new(&config);
    assert_eq!(t.tokenize("The cat and a dog"), vec!["cat", "a", "dog"]);
}

#[test]
fn empty_stopword_set_keeps_everything() {
    let config = AnalysisConfig {
        stopwords: String::new(),
        ..Default::default()
    };
    let t = Tokenizer::new(&config);
    assert_eq!(t.tokenize("shampoo and groom"), vec!["shampoo", "and", "groom"]);
}
