//! Arbitrary-precision base-10 numbers.
//!
//! A [`Decimal`] is stored as `mantissa / 10^scale` with a [`BigInt`]
//! mantissa. Values are kept normalized (no trailing fractional zeros, zero
//! has scale 0), so two decimals are equal exactly when they denote the same
//! number, whatever text they were parsed from.
//!
//! Quiz answers are compared with this type instead of `f64`: scaling `0.1`
//! by `1000` has to give exactly `100`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::error::DecimalError;

/// Fractional digits kept when a quotient does not terminate in base 10.
pub const DIVISION_SCALE: u32 = 32;

/// An exact signed decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DecimalRepr", into = "String")]
pub struct Decimal {
    mantissa: BigInt,
    scale: u32,
}

impl Decimal {
    /// Build a decimal from `mantissa / 10^scale`, normalizing the result.
    pub fn new(mantissa: BigInt, scale: u32) -> Self {
        if mantissa.is_zero() {
            return Self { mantissa, scale: 0 };
        }

        let ten = BigInt::from(10u8);
        let mut mantissa = mantissa;
        let mut scale = scale;
        while scale > 0 {
            let (quotient, remainder) = mantissa.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            mantissa = quotient;
            scale -= 1;
        }

        Self { mantissa, scale }
    }

    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// Parse a plain decimal literal: optional `-`, digits, optional `.`,
    /// digits. Exponents, `+` signs and whitespace are rejected.
    pub fn parse(text: &str) -> Result<Self, DecimalError> {
        text.parse()
    }

    /// Number of fractional digits in the normalized form.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    /// Divide `self` by `divisor`.
    ///
    /// Quotients that terminate in base 10 are exact. Anything else (e.g.
    /// `1 / 3`) is rounded half-even to [`DIVISION_SCALE`] fractional digits.
    pub fn checked_div(&self, divisor: &Decimal) -> Result<Decimal, DecimalError> {
        if divisor.is_zero() {
            return Err(DecimalError::DivideByZero);
        }

        // (a / 10^sa) / (b / 10^sb) = (a * 10^sb) / (b * 10^sa)
        let mut numer = &self.mantissa * pow10(divisor.scale);
        let mut denom = &divisor.mantissa * pow10(self.scale);
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        let gcd = numer.gcd(&denom);
        numer /= &gcd;
        denom /= &gcd;

        match terminating_exponent(&denom) {
            Some(exp) => {
                let factor = pow10(exp) / &denom;
                Ok(Decimal::new(numer * factor, exp))
            }
            None => {
                let scaled = numer * pow10(DIVISION_SCALE);
                Ok(Decimal::new(
                    div_round_half_even(scaled, &denom),
                    DIVISION_SCALE,
                ))
            }
        }
    }

    /// Both mantissas brought to a common scale.
    fn aligned(&self, other: &Decimal) -> (BigInt, BigInt) {
        let scale = self.scale.max(other.scale);
        (
            &self.mantissa * pow10(scale - self.scale),
            &other.mantissa * pow10(scale - other.scale),
        )
    }
}

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

/// If `denom` (positive) divides some power of ten, return the smallest such
/// exponent.
fn terminating_exponent(denom: &BigInt) -> Option<u32> {
    let five = BigInt::from(5u8);
    let mut rest = denom.clone();
    let mut twos = 0u32;
    let mut fives = 0u32;

    while !rest.is_zero() && rest.is_even() {
        rest >>= 1;
        twos += 1;
    }
    loop {
        let (quotient, remainder) = rest.div_rem(&five);
        if !remainder.is_zero() || quotient.is_zero() {
            break;
        }
        rest = quotient;
        fives += 1;
    }

    rest.is_one().then(|| twos.max(fives))
}

/// `numer / denom` rounded to nearest, ties to even. `denom` must be positive.
fn div_round_half_even(numer: BigInt, denom: &BigInt) -> BigInt {
    let (quotient, remainder) = numer.div_mod_floor(denom);
    let twice = remainder * 2u8;
    match twice.cmp(denom) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1u8,
        Ordering::Equal if quotient.is_even() => quotient,
        Ordering::Equal => quotient + 1u8,
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecimalError::InvalidLiteral(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        // A second '.' ends up in `frac_part` and fails here too.
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }

        let digits = format!("{int_part}{frac_part}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let scale = u32::try_from(frac_part.len()).map_err(|_| invalid())?;

        let mantissa = if negative { -magnitude } else { magnitude };
        Ok(Decimal::new(mantissa, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.abs().to_string();
        let scale = self.scale as usize;
        let sign = if self.is_negative() { "-" } else { "" };

        let text = if scale == 0 {
            format!("{sign}{digits}")
        } else if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            format!("{sign}{int_part}.{frac_part}")
        } else {
            let zeros = "0".repeat(scale - digits.len());
            format!("{sign}0.{zeros}{digits}")
        };

        f.pad(&text)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = self.aligned(other);
        lhs.cmp(&rhs)
    }
}

impl Mul<&Decimal> for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal::new(&self.mantissa * &rhs.mantissa, self.scale + rhs.scale)
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        &self * &rhs
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Decimal::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u32, u64);

/// Accepted serialized forms. Floats are rejected.
#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Text(String),
    Integer(i64),
}

impl TryFrom<DecimalRepr> for Decimal {
    type Error = DecimalError;

    fn try_from(repr: DecimalRepr) -> Result<Self, Self::Error> {
        match repr {
            DecimalRepr::Text(text) => text.parse(),
            DecimalRepr::Integer(value) => Ok(Decimal::from(value)),
        }
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.to_string()
    }
}
