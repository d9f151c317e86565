/// Format an integer with comma thousands separators, e.g. "1,234,567"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a gigabyte total as "X.XX TB (N GB)"
pub fn format_storage(gb: f64) -> String {
    format!("{:.2} TB ({:.0} GB)", gb / 1024.0, gb)
}

/// Rough file count for headlines, e.g. "~247K+"
pub fn format_item_estimate(items: u64) -> String {
    format!("~{}K+", items / 1000)
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent)
}
