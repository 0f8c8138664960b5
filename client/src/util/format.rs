//! Number formatting for dashboard figures.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format `amount` as US dollars with thousands separators, e.g. `$1,234.50`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let frac = cents - whole * 100.0;
    let sign = if amount < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac:02.0}", group_thousands(whole))
}

/// Format `value` with two decimals and a percent sign, e.g. `12.34%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(whole: f64) -> String {
    let digits = format!("{whole:.0}");
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
