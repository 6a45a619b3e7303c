//! Display formatting for prices, market sizes, and P&L.
//!
//! These strings are what the UI renders verbatim, so the thresholds and
//! decimal places are fixed: `format_price(0.5) == "0.500000"`,
//! `format_market_cap(1_500_000_000.0) == "$1.50B"`.

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Six decimals below 1, two otherwise.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price < 1.0 {
        format!("{price:.6}")
    } else {
        format!("{price:.2}")
    }
}

/// `$x.xxB` from one billion, `$x.xxM` from one million, `$x.xxK` below.
#[must_use]
pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= BILLION {
        format!("${:.2}B", market_cap / BILLION)
    } else if market_cap >= MILLION {
        format!("${:.2}M", market_cap / MILLION)
    } else {
        format!("${:.2}K", market_cap / THOUSAND)
    }
}

/// `$x.xxM` from one million, `$x.xxK` below.
///
/// Unlike [`format_market_cap`] there is no billions tier: the explorer's
/// volume column has always read in millions, and no listed token trades
/// a billion a day. Ten billion renders as `$10000.00M`.
#[must_use]
pub fn format_volume(volume: f64) -> String {
    if volume >= MILLION {
        format!("${:.2}M", volume / MILLION)
    } else {
        format!("${:.2}K", volume / THOUSAND)
    }
}

/// Two-decimal percentage with an explicit `+` for non-negative values.
#[must_use]
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// One-decimal percentage without sign, as used by progress bars.
#[must_use]
pub fn format_progress(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed USD amount with thousands separators: `+$1,234.56`, `-$621.88`.
#[must_use]
pub fn format_signed_usd(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{sign}${}", format_usd_magnitude(value.abs()))
}

/// Unsigned USD amount with thousands separators: `$12,345.67`.
#[must_use]
pub fn format_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_usd_magnitude(value.abs()))
    } else {
        format!("${}", format_usd_magnitude(value))
    }
}

/// Integer count with thousands separators: `1,247`.
#[must_use]
pub fn format_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

fn format_usd_magnitude(value: f64) -> String {
    let fixed = format!("{value:.2}");
    match fixed.split_once('.') {
        Some((int, frac)) => format!("{}.{frac}", group_thousands(int)),
        None => group_thousands(&fixed),
    }
}

/// Inserts a comma every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
