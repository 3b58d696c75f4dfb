use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Центральная структура библиотеки, содержащая одну денежную сумму.
///
/// Хранится уже разложенной: знак, целые единицы валюты и дробная часть
/// в сотых долях (0..=99) лежат отдельно и при переводе в слова заново
/// не вычисляются.
///
/// Пример использования:
/// ```
/// use propis::{Amount, Currency};
///
/// let amount: Amount = "1 234,56".parse()?;
/// assert_eq!(amount, Amount::from_decimal(1234.56));
/// assert_eq!(
///     amount.to_words(Currency::KZT),
///     "одна тысяча двести тридцать четыре тенге 56 тиын"
/// );
/// # Ok::<(), propis::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    negative: bool,
    units: u64,
    cents: u8,
}

impl Amount {
    /// Нулевая сумма
    pub const ZERO: Amount = Amount {
        negative: false,
        units: 0,
        cents: 0,
    };

    /// Сумма из количества минимальных единиц ("копеек") со знаком
    ///
    /// 12345 копеек = 123 рубля 45 копеек.
    pub fn from_minor_units(minor: i64) -> Amount {
        let abs = minor.unsigned_abs();
        Amount {
            negative: minor < 0,
            units: abs / 100,
            cents: (abs % 100) as u8,
        }
    }

    /// Сумма из десятичного значения
    ///
    /// Целая часть отделяется от дробной до перевода в слова, дробная
    /// округляется до сотых. NaN и бесконечности дают ноль.
    pub fn from_decimal(value: f64) -> Amount {
        if !value.is_finite() {
            return Amount::ZERO;
        }

        let negative = value < 0.0;
        let abs = value.abs();

        let mut units = abs.trunc() as u64;
        let mut cents = ((abs - abs.trunc()) * 100.0).round() as u64;

        // хвост точнее сотых может округлиться в целую сотню
        if cents >= 100 {
            units += cents / 100;
            cents %= 100;
        }

        if units == 0 && cents == 0 {
            // "минус ноль" не храним
            return Amount::ZERO;
        }

        Amount {
            negative,
            units,
            cents: cents as u8,
        }
    }

    /// Собирает сумму из уже разобранных частей, `cents` в 0..=99
    pub(crate) fn from_parts(negative: bool, units: u64, cents: u8) -> Amount {
        Amount {
            negative: negative && (units > 0 || cents > 0),
            units,
            cents,
        }
    }

    /// Целая часть, в основных единицах валюты
    pub fn units(&self) -> u64 {
        self.units
    }

    /// Дробная часть в минимальных единицах, 0..=99
    pub fn cents(&self) -> u8 {
        self.cents
    }

    /// Отрицательная ли сумма
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Нулевая ли сумма
    pub fn is_zero(&self) -> bool {
        self.units == 0 && self.cents == 0
    }

    /// Вся сумма в минимальных единицах со знаком
    pub fn minor_units(&self) -> i128 {
        let abs = self.units as i128 * 100 + self.cents as i128;
        if self.negative { -abs } else { abs }
    }
}

impl FromStr for Amount {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_amount(raw)
    }
}

/// Поддерживаемые валюты
///
/// Для каждой известны слова суммы прописью, см. [`Currency::words`].
/// Прочие валюты описываются вручную через
/// [`CurrencyWords`](crate::spellout::CurrencyWords).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// Казахстанский тенге
    KZT,
    /// Российский рубль
    RUB,
    /// Американский доллар
    USD,
    /// Евро
    EUR,
}

impl FromStr for Currency {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_currency(raw)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{sign}{}.{:02}", self.units, self.cents)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::KZT => write!(f, "KZT"),
            Currency::RUB => write!(f, "RUB"),
            Currency::USD => write!(f, "USD"),
            Currency::EUR => write!(f, "EUR"),
        }
    }
}
