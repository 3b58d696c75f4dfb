//! Сумма прописью на русском языке.
//!
//! Библиотека переводит денежную сумму в грамматически корректную
//! строку для печатных форм счетов и платёжных документов:
//! «двадцать одна тысяча триста сорок пять тенге 05 тиын».
//! Учитываются род числительных, формы множественного числа для
//! тысяч, миллионов и валютных единиц, знак суммы.
//!
//! ```
//! use propis::{Amount, Currency};
//!
//! let amount = Amount::from_decimal(2500000.0);
//! assert_eq!(amount.to_words(Currency::KZT), "два миллиона пятьсот тысяч тенге");
//! ```

pub mod error;
pub mod format;
pub mod model;
pub mod numerals;
pub mod spellout;

mod parse;

pub use crate::error::ParseError;
pub use crate::format::format_amount;
pub use crate::model::{Amount, Currency};
pub use crate::numerals::{Gender, WordForms};
pub use crate::spellout::{CurrencyWords, amount_to_words};
