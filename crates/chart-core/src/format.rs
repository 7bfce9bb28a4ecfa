// File: crates/chart-core/src/format.rs
// Summary: Number formatting for axis labels and tooltip bodies.

const MAX_DECIMALS: usize = 12;

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Tooltip body: grouped integer plus unit, e.g. `12,345 tokens`.
pub fn format_value(value: u64, unit: &str) -> String {
    if unit.is_empty() {
        group_thousands(value)
    } else {
        format!("{} {}", group_thousands(value), unit)
    }
}

/// Compact tick label: `0`, `750`, `2.5k`, `1.25M`.
pub fn format_axis_value(v: f64) -> String {
    let abs = v.abs();
    if abs >= 1_000_000.0 {
        format!("{}M", trim_decimal(v / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{}k", trim_decimal(v / 1_000.0))
    } else {
        trim_decimal(v)
    }
}

/// Two decimals, or enough to keep the two leading significant digits of
/// values below 0.01.
fn trim_decimal(v: f64) -> String {
    let abs = v.abs();
    let decimals = if abs > 0.0 && abs < 0.01 {
        ((-abs.log10()).ceil() as usize + 1).min(MAX_DECIMALS)
    } else {
        2
    };
    let s = format!("{v:.decimals$}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
