use vsc_schema::{ChartLine, FieldPolicy, FIELD_SEPARATOR};

/// Decimal exponent at which `format_timestamp` switches to exponent form.
const EXP_UPPER: i32 = 16;
const EXP_LOWER: i32 = -4;

/// Rounds to `places` decimals on the exact binary value, ties to even.
pub fn round_to_places(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let fixed = format!("{value:.places$}");
    fixed.parse().unwrap_or(value)
}

/// Shortest round-trip text for a timestamp.
///
/// Integral values keep a `.0` suffix (`150.0`), and magnitudes outside
/// `1e-4 ..< 1e16` use a signed two-digit exponent (`1e-05`, `1.5e+16`).
pub fn format_timestamp(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{sign}0.0");
    }

    // `{:e}` yields the shortest digits, e.g. "1.5e2" or "1e-5"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if !(EXP_LOWER..EXP_UPPER).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{exp_sign}{:02}", exp.abs())
    } else if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("0.{zeros}{digits}")
    } else {
        let int_len = exp as usize + 1;
        if digits.len() > int_len {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        } else {
            let pad = "0".repeat(int_len - digits.len());
            format!("{digits}{pad}.0")
        }
    };

    format!("{sign}{body}")
}

/// Renders a shifted chart line as it is written back to disk.
pub(crate) fn render_line(line: &ChartLine, policy: FieldPolicy) -> String {
    let timestamp = format_timestamp(line.timestamp_ms);
    match policy {
        FieldPolicy::TimestampOnly => timestamp,
        FieldPolicy::Preserve => {
            let mut fields = Vec::with_capacity(2 + line.extra_fields.len());
            fields.push(timestamp.as_str());
            fields.push(line.type_code.as_str());
            fields.extend(line.extra_fields.iter().map(String::as_str));
            fields.join(&FIELD_SEPARATOR.to_string())
        }
    }
}
