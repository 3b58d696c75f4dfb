//! Числовая форма суммы для печатных документов.

use crate::model::Amount;

/// Форматирует сумму с группировкой тысяч пробелами: "1 234 567,89"
///
/// Знак сохраняется, дробная часть печатается всегда двумя цифрами.
pub fn format_amount(amount: &Amount, decimal_separator: char) -> String {
    let digits = amount.units().to_string();

    // группы по три цифры, считая от конца
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{sign}{grouped}{decimal_separator}{:02}", amount.cents())
}
