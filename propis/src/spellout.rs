//! Перевод суммы в слова: масштабные разряды, слова валют и сборка
//! итоговой строки.

use crate::model::{Amount, Currency};
use crate::numerals::{self, Gender, WordForms};

/// Слова валюты для суммы прописью
///
/// Встроенные валюты отдаёт [`Currency::words`]; любую другую можно
/// описать самостоятельно:
/// ```
/// use propis::{Amount, CurrencyWords, Gender, WordForms};
///
/// const UAH: CurrencyWords = CurrencyWords {
///     major_gender: Gender::Feminine,
///     major: WordForms { one: "гривна", few: "гривны", many: "гривен" },
///     minor: WordForms { one: "копейка", few: "копейки", many: "копеек" },
/// };
///
/// let words = Amount::from_minor_units(2100).to_words_with(&UAH);
/// assert_eq!(words, "двадцать одна гривна");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurrencyWords {
    /// род основной единицы: «один рубль», но «одна гривна»
    pub major_gender: Gender,
    /// формы основной единицы
    pub major: WordForms,
    /// формы дробной единицы
    pub minor: WordForms,
}

/// Масштабный разряд: множитель и слова для своей трёхзначной группы
struct Scale {
    factor: u64,
    words: WordForms,
    /// род числительных внутри группы: тысячи женского рода
    gender: Gender,
}

// Разряды по убыванию. Слов старше миллионов в таблице нет, поэтому
// суммы от миллиарда основных единиц прописываются без верхних групп.
// Новый разряд добавляется одной строкой таблицы.
const SCALES: [Scale; 2] = [
    Scale {
        factor: 1_000_000,
        words: WordForms {
            one: "миллион",
            few: "миллиона",
            many: "миллионов",
        },
        gender: Gender::Masculine,
    },
    Scale {
        factor: 1_000,
        words: WordForms {
            one: "тысяча",
            few: "тысячи",
            many: "тысяч",
        },
        gender: Gender::Feminine,
    },
];

// «тенге» и «тиын» не склоняются
const TENGE: CurrencyWords = CurrencyWords {
    major_gender: Gender::Masculine,
    major: WordForms {
        one: "тенге",
        few: "тенге",
        many: "тенге",
    },
    minor: WordForms {
        one: "тиын",
        few: "тиын",
        many: "тиын",
    },
};

const RUBLE: CurrencyWords = CurrencyWords {
    major_gender: Gender::Masculine,
    major: WordForms {
        one: "рубль",
        few: "рубля",
        many: "рублей",
    },
    minor: WordForms {
        one: "копейка",
        few: "копейки",
        many: "копеек",
    },
};

const DOLLAR: CurrencyWords = CurrencyWords {
    major_gender: Gender::Masculine,
    major: WordForms {
        one: "доллар",
        few: "доллара",
        many: "долларов",
    },
    minor: WordForms {
        one: "цент",
        few: "цента",
        many: "центов",
    },
};

// «евро» не склоняется
const EURO: CurrencyWords = CurrencyWords {
    major_gender: Gender::Masculine,
    major: WordForms {
        one: "евро",
        few: "евро",
        many: "евро",
    },
    minor: WordForms {
        one: "цент",
        few: "цента",
        many: "центов",
    },
};

impl Currency {
    /// Слова для суммы прописью в этой валюте
    pub fn words(self) -> &'static CurrencyWords {
        match self {
            Currency::KZT => &TENGE,
            Currency::RUB => &RUBLE,
            Currency::USD => &DOLLAR,
            Currency::EUR => &EURO,
        }
    }
}

impl Amount {
    /// Сумма прописью во встроенной валюте
    ///
    /// ```
    /// use propis::{Amount, Currency};
    ///
    /// let words = Amount::from_minor_units(2100405).to_words(Currency::RUB);
    /// assert_eq!(words, "двадцать одна тысяча четыре рубля 05 копеек");
    /// ```
    pub fn to_words(&self, currency: Currency) -> String {
        self.to_words_with(currency.words())
    }

    /// Сумма прописью с произвольными словами валюты
    ///
    /// Идёт по группам от старшей к младшей: нулевые группы молчат,
    /// за каждой ненулевой следует её масштабное слово в нужной форме.
    /// Название валюты стоит всегда, дробная часть дописывается цифрами
    /// («12 тенге 05 тиын») и при нуле опускается.
    pub fn to_words_with(&self, currency: &CurrencyWords) -> String {
        if self.is_zero() {
            return format!("{} {}", numerals::ZERO, currency.major.pick(0));
        }

        let mut words: Vec<&'static str> = Vec::new();

        if self.is_negative() {
            words.push("минус");
        }

        let units = self.units();
        for scale in &SCALES {
            let group = (units / scale.factor) % 1000;
            if group > 0 {
                numerals::spell_group(group, scale.gender, &mut words);
                words.push(scale.words.pick(group));
            }
        }

        numerals::spell_group(units % 1000, currency.major_gender, &mut words);
        words.push(currency.major.pick(units));

        let mut result = words.join(" ");

        let cents = self.cents();
        if cents > 0 {
            result.push_str(&format!(" {:02} {}", cents, currency.minor.pick(cents as u64)));
        }

        result
    }
}

/// Переводит десятичную сумму в слова одной функцией
///
/// Обёртка над [`Amount::from_decimal`] и [`Amount::to_words`] для
/// вызовов, где сумма уже есть числом.
pub fn amount_to_words(value: f64, currency: Currency) -> String {
    Amount::from_decimal(value).to_words(currency)
}
