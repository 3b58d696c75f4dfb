use std::io::Error as IoError;
use thiserror::Error;

/// Ошибки при парсинге сумм и валют
///
/// Сам перевод в слова ошибок не даёт: он определён для любой
/// уже построенной суммы.
#[derive(Debug, Error)]
pub enum ParseError {
    // обёртки

    /// обёртка std::num::ParseIntError
    #[error("number parse error: {0}")]
    Int(#[from] std::num::ParseIntError),

    /// обёртка std::io::Error
    #[error("io error: {0}")]
    Io(#[from] IoError),

    // логические ошибки

    /// ошибка при парсинге денежной суммы
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// ошибка при парсинге валюты
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),
}
