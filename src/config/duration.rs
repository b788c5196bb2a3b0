use serde::{de, Deserialize, Deserializer};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("invalid number in duration {0:?}")]
    InvalidNumber(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

// Nanoseconds per unit.
fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}

/// Parses durations written as a sequence of `<number><unit>` groups, such as
/// `"90s"`, `"1h30m"` or `"1.5m"`. A bare `"0"` is the only unitless value accepted.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(DurationError::Empty);
    }
    if trimmed == "0" {
        return Ok(Duration::ZERO);
    }

    let mut rest = trimmed;
    let mut total: u128 = 0;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);

        if number.is_empty() {
            return Err(DurationError::InvalidNumber(input.to_string()));
        }
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }

        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        total = total
            .checked_add(component_nanos(number, scale, input)?)
            .ok_or_else(|| DurationError::Overflow(input.to_string()))?;
        rest = tail;
    }

    u64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| DurationError::Overflow(input.to_string()))
}

fn component_nanos(number: &str, scale: u128, input: &str) -> Result<u128, DurationError> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));

    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return Err(DurationError::InvalidNumber(input.to_string()));
    }

    let overflow = || DurationError::Overflow(input.to_string());

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let mut nanos = whole.checked_mul(scale).ok_or_else(overflow)?;

    // Digits past the 18th cannot contribute a whole nanosecond.
    let fraction = &fraction[..fraction.len().min(18)];
    if !fraction.is_empty() {
        let numerator: u128 = fraction.parse().map_err(|_| overflow())?;
        let denominator = 10u128.pow(fraction.len() as u32);
        nanos = nanos
            .checked_add(numerator * scale / denominator)
            .ok_or_else(overflow)?;
    }

    Ok(nanos)
}

/// Serde adapter for duration fields that must be strictly positive.
pub(crate) fn deserialize_positive<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let duration = parse_duration(&raw).map_err(de::Error::custom)?;

    if duration.is_zero() {
        return Err(de::Error::custom(format!(
            "duration must be greater than zero, got {raw:?}"
        )));
    }

    Ok(duration)
}
