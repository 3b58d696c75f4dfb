//! Разбор сумм и валют из строк.
//!
//! Суммы приходят из пользовательского ввода и выгрузок в вольном
//! виде: "1234.56", "1 234,56", "-500", иногда с неразрывными
//! пробелами между группами цифр.

use crate::error::ParseError;
use crate::model::{Amount, Currency};
use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    // ^-? - необязательный минус
    // \d+ - либо сплошные цифры,
    // \d{1,3}( \d{3})+ - либо группы по три через пробел
    // ([.,]\d{1,2})? - дробная часть, не длиннее двух цифр
    Regex::new(r"^-?(\d+|\d{1,3}( \d{3})+)([.,]\d{1,2})?$").unwrap()
});

pub(crate) fn parse_amount(raw: &str) -> Result<Amount, ParseError> {
    // неразрывные пробелы встречаются в банковских выгрузках
    let mut cleaned = raw.trim().replace('\u{00A0}', " ");

    if cleaned.contains(',') && cleaned.contains('.') {
        // оба разделителя сразу - запятые отделяют тысячи: "1,234.56"
        cleaned = cleaned.replace(',', "");
    }

    if cleaned.is_empty() {
        return Err(ParseError::InvalidAmount("empty amount".into()));
    }
    if !AMOUNT_RE.is_match(&cleaned) {
        return Err(ParseError::InvalidAmount(cleaned));
    }

    let cleaned = cleaned.replace(' ', "").replace(',', ".");

    let (negative, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let mut split = unsigned.split('.');
    // строка прошла регулярку, так что целая часть есть, а точка максимум одна
    let int_part = split.next().unwrap_or("");
    let dec_part = split.next().unwrap_or("");

    let units: u64 = int_part.parse()?;

    let cents: u8 = match dec_part.len() {
        0 => 0,
        1 => {
            // одна цифра после запятой - это десятые: "12,5" значит 12,50
            dec_part.parse::<u8>()? * 10
        }
        _ => dec_part.parse()?,
    };

    Ok(Amount::from_parts(negative, units, cents))
}

pub(crate) fn parse_currency(raw: &str) -> Result<Currency, ParseError> {
    let s = raw.trim();
    let lower = s.to_lowercase();

    match lower.as_str() {
        "казахстанский тенге" | "тенге" | "тг" | "kzt" => Ok(Currency::KZT),
        "российский рубль" | "рубль" | "руб." | "руб" | "rub" | "rur" => Ok(Currency::RUB),
        "американский доллар" | "доллар сша" | "доллар" | "usd" => Ok(Currency::USD),
        "евро" | "eur" => Ok(Currency::EUR),

        _ => Err(ParseError::InvalidCurrency(s.to_string())),
    }
}
