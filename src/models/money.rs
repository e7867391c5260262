//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! drift when expenses are split. Provides safe arithmetic operations,
//! even allocation and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Default currency symbol used by `Display`
pub const DEFAULT_SYMBOL: &str = "₹";

/// Represents a monetary amount stored as minor units (hundredths of the
/// currency unit, e.g. paise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use tripledger::models::Money;
    /// let amount = Money::from_minor(1050); // ₹10.50
    /// assert_eq!(amount.major(), 10);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, returning `None` if the result does not fit
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Clamp negative amounts to zero
    pub fn floor_zero(&self) -> Self {
        Self(self.0.max(0))
    }

    /// Split the amount into `parts` shares that sum back to the original.
    ///
    /// Every share gets the floored quotient; the leftover minor units go one
    /// each to the leading shares. Returns an empty vector when `parts` is 0.
    ///
    /// # Examples
    /// ```
    /// use tripledger::models::Money;
    /// let shares = Money::from_minor(100).allocate(3);
    /// assert_eq!(shares, vec![Money::from_minor(34), Money::from_minor(33), Money::from_minor(33)]);
    /// ```
    pub fn allocate(&self, parts: usize) -> Vec<Money> {
        if parts == 0 {
            return Vec::new();
        }

        let n = parts as i64;
        let base = self.0.div_euclid(n);
        let leftover = self.0.rem_euclid(n) as usize;

        (0..parts)
            .map(|i| Money(if i < leftover { base + 1 } else { base }))
            .collect()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "$10.50", "1,200", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s
            .strip_prefix(DEFAULT_SYMBOL)
            .or_else(|| s.strip_prefix('$'))
            .unwrap_or(s);
        let cleaned: String = s.chars().filter(|c| *c != ',').collect();
        let s = cleaned.as_str();

        let minor = if s.contains('.') {
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let major: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate to 2 digits
            let minor_str = parts[1];
            let minor: i64 = match minor_str.len() {
                0 => 0,
                1 => {
                    minor_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => minor_str
                    .get(..2)
                    .and_then(|digits| digits.parse().ok())
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            major * 100 + minor
        } else {
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.major().unsigned_abs()),
            self.minor_part()
        )
    }

    /// Plain decimal string in whole units ("-1234.50"), for exports
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}.{:02}",
            sign,
            self.major().unsigned_abs(),
            self.minor_part()
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
