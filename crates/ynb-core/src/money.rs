//! Minor-unit money rendering.

/// Format an amount in API minor units (tenths of a cent) as a grouped
/// decimal string like `"123,456.78"`.
///
/// Non-zero amounts below one cent render as `"0.01"` (with sign) rather
/// than `"0.00"`, so genuinely non-zero activity never looks like nothing.
/// Larger amounts are rounded to whole cents, half away from zero.
pub fn format_money(amount: i64) -> String {
    if amount == 0 {
        return "0.00".to_string();
    }

    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();

    if abs < 10 {
        return format!("{sign}0.01");
    }

    let cents = (abs + 5) / 10;
    let major = cents / 100;
    let minor = cents % 100;

    format!("{sign}{}.{minor:02}", group_thousands(major))
}

/// Insert a comma every 3 digits from the right, no separator before the
/// first group.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
