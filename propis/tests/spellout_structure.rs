use propis::{Amount, Currency, amount_to_words};

// структурные свойства прописи: на каждую ненулевую трёхзначную группу
// приходится ровно одно масштабное слово, нулевые группы молчат

#[test]
fn one_scale_word_per_non_zero_thousands_group() {
    // подстрока "тысяч" входит во все формы: тысяча/тысячи/тысяч
    for units in [1_i64, 999, 1000, 1001, 21000, 100000, 999999, 1000000, 1000001] {
        let words = Amount::from_minor_units(units * 100).to_words(Currency::KZT);

        let expected = usize::from((units / 1000) % 1000 > 0);
        assert_eq!(
            words.matches("тысяч").count(),
            expected,
            "units = {units}, words = '{words}'"
        );
    }
}

#[test]
fn one_scale_word_per_non_zero_millions_group() {
    for units in [999_999_i64, 1_000_000, 2_500_000, 999_000_001] {
        let words = Amount::from_minor_units(units * 100).to_words(Currency::KZT);

        let expected = usize::from(units / 1_000_000 > 0);
        assert_eq!(
            words.matches("миллион").count(),
            expected,
            "units = {units}, words = '{words}'"
        );
    }
}

#[test]
fn zero_thousands_group_is_never_mentioned() {
    let words = amount_to_words(1000001.0, Currency::KZT);
    assert_eq!(words, "один миллион один тенге");
    assert!(
        !words.contains("тысяч"),
        "unexpected thousands clause: '{words}'"
    );
}

#[test]
fn teen_amounts_spell_as_one_word_plus_currency() {
    for n in 10..=19_i64 {
        let words = Amount::from_minor_units(n * 100).to_words(Currency::KZT);
        let parts: Vec<&str> = words.split(' ').collect();

        assert_eq!(
            parts.len(),
            2,
            "teen amount {n} must be a single word plus currency, got '{words}'"
        );
        assert_eq!(parts[1], "тенге");
    }
}

#[test]
fn sampled_amounts_spell_without_artifacts() {
    // шаг простым числом, чтобы пройтись по разным комбинациям групп
    for units in (0..1_000_000_i64).step_by(7919) {
        let words = Amount::from_minor_units(units * 100).to_words(Currency::KZT);

        assert!(!words.is_empty(), "empty words for {units}");
        assert!(words.ends_with("тенге"), "words for {units} must end with currency: '{words}'");
        assert!(!words.contains("  "), "double space for {units}: '{words}'");
        assert_eq!(words.trim(), words, "untrimmed words for {units}: '{words}'");
    }
}

#[test]
fn spelling_is_deterministic() {
    let first = amount_to_words(987654.32, Currency::KZT);
    for _ in 0..3 {
        assert_eq!(amount_to_words(987654.32, Currency::KZT), first);
    }
    assert_eq!(
        first,
        "девятьсот восемьдесят семь тысяч шестьсот пятьдесят четыре тенге 32 тиын"
    );
}
