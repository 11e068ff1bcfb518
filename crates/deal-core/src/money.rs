//! Money amounts for deal size and valuation.
//!
//! Listing data carries amounts as display strings such as `"$2.5M"` or
//! `"1,200,000"`. `Money` parses those once, at construction, into whole US
//! dollars and renders them back in the same compact form.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000;

/// A non-negative amount in whole US dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Money {
    dollars: u64,
}

impl Money {
    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self { dollars }
    }

    #[must_use]
    pub const fn dollars(self) -> u64 {
        self.dollars
    }

    /// Parse a display amount: optional `$`, digits with optional `,`
    /// thousands grouping, an optional decimal part, and an optional
    /// `K`/`M`/`B` suffix.
    ///
    /// Fractions below one dollar are truncated.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for empty, negative, malformed, or
    /// overflowing input.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::Validation(format!("invalid money amount '{raw}'"));

        let trimmed = raw.trim();
        let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        if unsigned.is_empty() || unsigned.starts_with('-') {
            return Err(invalid());
        }

        let (number, multiplier) = match unsigned.chars().last() {
            Some('k' | 'K') => (&unsigned[..unsigned.len() - 1], THOUSAND),
            Some('m' | 'M') => (&unsigned[..unsigned.len() - 1], MILLION),
            Some('b' | 'B') => (&unsigned[..unsigned.len() - 1], BILLION),
            _ => (unsigned, 1),
        };
        let number = number.trim();
        let (grouped, fraction) = number.split_once('.').unwrap_or((number, ""));
        let whole = ungroup(grouped).ok_or_else(invalid)?;
        let whole = whole.as_str();
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let whole_value = if whole.is_empty() {
            0
        } else {
            whole.parse::<u64>().map_err(|_| invalid())?
        };
        let mut dollars = whole_value.checked_mul(multiplier).ok_or_else(invalid)?;

        // Scale the fraction digit by digit so "2.5M" stays exact.
        let mut place = multiplier;
        for digit in fraction.chars() {
            place /= 10;
            if place == 0 {
                break;
            }
            let digit = u64::from(digit.to_digit(10).ok_or_else(invalid)?);
            dollars = dollars
                .checked_add(digit * place)
                .ok_or_else(invalid)?;
        }

        Ok(Self { dollars })
    }
}

/// Strip `,` thousands separators. Groups after the first must be exactly
/// three digits, so `"1,200,000"` passes and `"1,2,3"` does not.
fn ungroup(whole: &str) -> Option<String> {
    let mut groups = whole.split(',');
    let first = groups.next().unwrap_or_default();
    let mut digits = first.to_string();
    let mut grouped = false;
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        grouped = true;
        digits.push_str(group);
    }
    if grouped && !(1..=3).contains(&first.len()) {
        return None;
    }
    Some(digits)
}

/// Render `dollars / unit` with up to two decimals, or `None` if that loses precision.
fn scaled(dollars: u64, unit: u64, suffix: &str) -> Option<String> {
    let whole = dollars / unit;
    let rest = dollars % unit;
    if rest == 0 {
        return Some(format!("${whole}{suffix}"));
    }
    let hundredths_unit = unit / 100;
    if rest % hundredths_unit != 0 {
        return None;
    }
    let hundredths = rest / hundredths_unit;
    let fraction = format!("{hundredths:02}");
    Some(format!("${whole}.{}{suffix}", fraction.trim_end_matches('0')))
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.dollars;
        let compact = if d >= BILLION {
            scaled(d, BILLION, "B")
        } else if d >= MILLION {
            scaled(d, MILLION, "M")
        } else if d >= THOUSAND {
            scaled(d, THOUSAND, "K")
        } else {
            None
        };
        match compact {
            Some(text) => f.write_str(&text),
            None => write!(f, "${d}"),
        }
    }
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a money amount such as \"$2.5M\" or a non-negative integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money::from_dollars(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        u64::try_from(v)
            .map(Money::from_dollars)
            .map_err(|_| E::custom(format!("invalid money amount '{v}'")))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

impl JsonSchema for Money {
    fn schema_name() -> Cow<'static, str> {
        "Money".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string" },
                { "type": "integer", "minimum": 0 }
            ]
        })
    }
}
