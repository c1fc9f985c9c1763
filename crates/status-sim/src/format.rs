const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Dollar display used for every gauge: `$1.25M`, `$450.0K`, `$850`.
pub fn format_currency(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= MILLION {
        format!("${:.2}M", value / MILLION)
    } else if magnitude >= THOUSAND {
        format!("${:.1}K", value / THOUSAND)
    } else {
        format!("${value:.0}")
    }
}
