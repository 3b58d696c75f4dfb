//! Русские числительные: таблицы слов, согласование форм и
//! произнесение трёхзначной группы.
//!
//! Слой без денег и валют, им пользуется перевод суммы в слова.

/// Грамматический род числительного
///
/// Влияет только на слова для 1 и 2: «один»/«одна», «два»/«две».
/// Нужен тысячам («одна тысяча») и валютам с женским основным
/// словом («одна гривна»).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// мужской род: «один», «два»
    Masculine,
    /// женский род: «одна», «две»
    Feminine,
}

/// Три формы существительного при числительном
///
/// Русское согласование выбирает форму по последним двум цифрам числа:
/// «один миллион», «два миллиона», «пять миллионов».
///
/// ```
/// use propis::WordForms;
///
/// let forms = WordForms { one: "миллион", few: "миллиона", many: "миллионов" };
/// assert_eq!(forms.pick(1), "миллион");
/// assert_eq!(forms.pick(2), "миллиона");
/// assert_eq!(forms.pick(11), "миллионов");
/// assert_eq!(forms.pick(105), "миллионов");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordForms {
    /// форма при 1: «тысяча», «рубль»
    pub one: &'static str,
    /// форма при 2..=4: «тысячи», «рубля»
    pub few: &'static str,
    /// форма при 0, 5..=20 и прочих: «тысяч», «рублей»
    pub many: &'static str,
}

impl WordForms {
    /// Выбирает форму слова для числа `n`
    ///
    /// 11..=14 всегда дают форму many («одиннадцать тысяч»), какой бы
    /// ни была последняя цифра; дальше решает последняя цифра.
    pub fn pick(&self, n: u64) -> &'static str {
        match n % 100 {
            11..=14 => self.many,
            r => match r % 10 {
                1 => self.one,
                2..=4 => self.few,
                _ => self.many,
            },
        }
    }
}

/// «ноль» произносится только для нулевой суммы целиком,
/// в группах нулю слова не положено
pub(crate) const ZERO: &str = "ноль";

const UNITS_MASCULINE: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

const UNITS_FEMININE: [&str; 10] = [
    "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

// слоты 0 и 1 пустые: 1..=9 закрывают единицы, 10..=19 - TEENS
const TENS: [&str; 10] = [
    "", "", "двадцать", "тридцать", "сорок", "пятьдесят",
    "шестьдесят", "семьдесят", "восемьдесят", "девяносто",
];

const HUNDREDS: [&str; 10] = [
    "", "сто", "двести", "триста", "четыреста", "пятьсот",
    "шестьсот", "семьсот", "восемьсот", "девятьсот",
];

/// Дописывает в `out` слова для трёхзначной группы `n` (0..=999)
///
/// Для нуля не дописывает ничего: нулевые группы в сумме прописью
/// не упоминаются.
pub(crate) fn spell_group(n: u64, gender: Gender, out: &mut Vec<&'static str>) {
    let hundreds = ((n / 100) % 10) as usize;
    if hundreds > 0 {
        out.push(HUNDREDS[hundreds]);
    }

    let rest = n % 100;
    if (10..=19).contains(&rest) {
        // 10..=19 - одно слово, на десятки и единицы не распадается
        out.push(TEENS[(rest - 10) as usize]);
        return;
    }

    let tens = (rest / 10) as usize;
    if tens > 0 {
        out.push(TENS[tens]);
    }

    let units = (rest % 10) as usize;
    if units > 0 {
        let table = match gender {
            Gender::Masculine => &UNITS_MASCULINE,
            Gender::Feminine => &UNITS_FEMININE,
        };
        out.push(table[units]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(n: u64, gender: Gender) -> String {
        let mut out = Vec::new();
        spell_group(n, gender, &mut out);
        out.join(" ")
    }

    // spell_group

    #[test]
    fn spells_units_tens_and_hundreds() {
        assert_eq!(spell(1, Gender::Masculine), "один");
        assert_eq!(spell(7, Gender::Masculine), "семь");
        assert_eq!(spell(37, Gender::Masculine), "тридцать семь");
        assert_eq!(spell(40, Gender::Masculine), "сорок");
        assert_eq!(spell(101, Gender::Masculine), "сто один");
        assert_eq!(spell(600, Gender::Masculine), "шестьсот");
        assert_eq!(spell(833, Gender::Masculine), "восемьсот тридцать три");
    }

    #[test]
    fn zero_group_spells_to_nothing() {
        assert_eq!(spell(0, Gender::Masculine), "");
        assert_eq!(spell(0, Gender::Feminine), "");
    }

    #[test]
    fn teens_are_single_words() {
        assert_eq!(spell(10, Gender::Masculine), "десять");
        assert_eq!(spell(11, Gender::Masculine), "одиннадцать");
        assert_eq!(spell(14, Gender::Masculine), "четырнадцать");
        assert_eq!(spell(19, Gender::Masculine), "девятнадцать");
        assert_eq!(spell(114, Gender::Masculine), "сто четырнадцать");
    }

    #[test]
    fn teens_never_split_into_tens_and_units() {
        for n in 10..=19 {
            let words = spell(n, Gender::Masculine);
            assert_eq!(
                words.split(' ').count(),
                1,
                "{n} must spell as a single word, got '{words}'"
            );
        }
    }

    #[test]
    fn feminine_changes_only_one_and_two() {
        assert_eq!(spell(1, Gender::Feminine), "одна");
        assert_eq!(spell(2, Gender::Feminine), "две");
        assert_eq!(spell(3, Gender::Feminine), "три");
        assert_eq!(spell(21, Gender::Feminine), "двадцать одна");
        assert_eq!(spell(22, Gender::Feminine), "двадцать две");
        assert_eq!(spell(22, Gender::Masculine), "двадцать два");
    }

    // WordForms::pick

    const THOUSAND: WordForms = WordForms {
        one: "тысяча",
        few: "тысячи",
        many: "тысяч",
    };

    #[test]
    fn pick_singular_for_last_digit_one() {
        assert_eq!(THOUSAND.pick(1), "тысяча");
        assert_eq!(THOUSAND.pick(21), "тысяча");
        assert_eq!(THOUSAND.pick(101), "тысяча");
    }

    #[test]
    fn pick_few_for_last_digit_two_to_four() {
        assert_eq!(THOUSAND.pick(2), "тысячи");
        assert_eq!(THOUSAND.pick(3), "тысячи");
        assert_eq!(THOUSAND.pick(4), "тысячи");
        assert_eq!(THOUSAND.pick(33), "тысячи");
        assert_eq!(THOUSAND.pick(104), "тысячи");
    }

    #[test]
    fn pick_many_for_teens_despite_last_digit() {
        for n in [11, 12, 13, 14, 111, 514, 211_012] {
            assert_eq!(THOUSAND.pick(n), "тысяч", "n = {n}");
        }
    }

    #[test]
    fn pick_many_for_zero_five_to_nine_and_round_tens() {
        for n in [0, 5, 6, 9, 10, 15, 20, 30, 100, 1000] {
            assert_eq!(THOUSAND.pick(n), "тысяч", "n = {n}");
        }
    }
}
