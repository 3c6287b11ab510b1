//! Shared ring arithmetic and labelling for the cyclic value types.
//!
//! [crate::tiangan::Tiangan], [crate::dizhi::Dizhi] and [crate::wuxing::Wuxing]
//! all store a 0-based position on a ring of fixed size. Every constructor
//! normalizes with Euclidean modulo, so arithmetic on these types never fails.

use crate::errors::FormatError;

/// Label set used when rendering a value as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Latin transliteration (Pinyin, or English for Wuxing). Specifier `G`.
    #[default]
    Latin,
    /// Chinese characters. Specifier `C`.
    Chinese,
    /// 1-based position number. Specifier `N`, Tiangan and Dizhi only.
    Number,
}

impl LabelStyle {
    /// Resolves a case-insensitive format specifier. An empty specifier means `G`.
    pub fn from_specifier(spec: &str) -> Result<Self, FormatError> {
        match spec.to_ascii_uppercase().as_str() {
            "" | "G" => Ok(LabelStyle::Latin),
            "C" => Ok(LabelStyle::Chinese),
            "N" => Ok(LabelStyle::Number),
            _ => Err(FormatError::UnsupportedSpecifier(spec.to_string())),
        }
    }
}

/// Normalizes any integer onto a ring of `modulus` positions.
pub fn normalize(value: i64, modulus: usize) -> usize {
    value.rem_euclid(modulus as i64) as usize
}

/// A value occupying one position on a fixed-size ring.
pub trait Cyclic: Copy + Sized {
    /// Number of positions on the ring.
    const MODULUS: usize;
    /// Type name used in parse errors.
    const NAME: &'static str;
    /// Latin label for each position, in ring order.
    const LATIN: &'static [&'static str];
    /// Chinese label for each position, in ring order.
    const CHINESE: &'static [&'static str];
    /// Whether the 1-based number is an accepted text form.
    const NUMBERED: bool;

    /// Builds a value from a 0-based position, reduced modulo [Cyclic::MODULUS].
    fn from_position(position: usize) -> Self;

    /// 0-based position in `[0, MODULUS)`.
    fn position(self) -> usize;

    /// Builds a value from any 0-based offset, negative or past the ring end.
    fn from_offset(offset: i64) -> Self {
        Self::from_position(normalize(offset, Self::MODULUS))
    }

    /// 1-based position, e.g. `1` for the first value of the ring.
    fn index(self) -> usize {
        self.position() + 1
    }

    /// Builds a value from a 1-based position; any integer is accepted.
    fn from_index(index: i64) -> Self {
        // Reduce before stepping back so `i64::MIN` cannot overflow.
        Self::from_position(
            (normalize(index, Self::MODULUS) + Self::MODULUS - 1) % Self::MODULUS,
        )
    }

    /// The value `n` steps further along the ring. `n` may be negative.
    fn next(self, n: i32) -> Self {
        Self::from_offset(self.position() as i64 + i64::from(n))
    }

    /// Every value of the ring, starting at position 0.
    fn all() -> impl Iterator<Item = Self> {
        (0..Self::MODULUS).map(Self::from_position)
    }

    fn latin(self) -> &'static str {
        Self::LATIN[self.position()]
    }

    fn chinese(self) -> &'static str {
        Self::CHINESE[self.position()]
    }

    /// Renders with a format specifier (`G`, `C`, or `N` where supported).
    fn to_string_with(self, spec: &str) -> Result<String, FormatError> {
        match LabelStyle::from_specifier(spec)? {
            LabelStyle::Latin => Ok(self.latin().to_string()),
            LabelStyle::Chinese => Ok(self.chinese().to_string()),
            LabelStyle::Number if Self::NUMBERED => Ok(self.index().to_string()),
            LabelStyle::Number => Err(FormatError::UnsupportedSpecifier(spec.to_string())),
        }
    }

    /// Parses a Latin or Chinese label (or a 1-based number where supported).
    /// Case-insensitive, surrounding whitespace ignored.
    fn try_parse(s: &str) -> Option<Self> {
        let s = s.trim();

        let by_label = (0..Self::MODULUS).find(|&p| {
            Self::LATIN[p].eq_ignore_ascii_case(s) || Self::CHINESE[p] == s
        });
        if let Some(position) = by_label {
            return Some(Self::from_position(position));
        }

        if Self::NUMBERED {
            return (0..Self::MODULUS)
                .find(|p| (p + 1).to_string() == s)
                .map(Self::from_position);
        }

        None
    }

    /// Like [Cyclic::try_parse], but reports the rejected input.
    fn parse_label(s: &str) -> Result<Self, FormatError> {
        Self::try_parse(s).ok_or_else(|| FormatError::unparsable(Self::NAME, s))
    }
}

/// Implements the operator and conversion traits shared by every [Cyclic] type.
///
/// `Display` writes the Latin label, or the Chinese label with `{:#}`.
macro_rules! impl_cyclic_value {
    ($ty:ident) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let label = if f.alternate() {
                    $crate::cyclic::Cyclic::chinese(*self)
                } else {
                    $crate::cyclic::Cyclic::latin(*self)
                };
                f.pad(label)
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::errors::FormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::cyclic::Cyclic>::parse_label(s)
            }
        }

        impl ::std::ops::Add<i32> for $ty {
            type Output = $ty;

            fn add(self, rhs: i32) -> $ty {
                $crate::cyclic::Cyclic::next(self, rhs)
            }
        }

        impl ::std::ops::Sub<i32> for $ty {
            type Output = $ty;

            fn sub(self, rhs: i32) -> $ty {
                let position = $crate::cyclic::Cyclic::position(self) as i64;
                <$ty as $crate::cyclic::Cyclic>::from_offset(position - i64::from(rhs))
            }
        }
    };
}

pub(crate) use impl_cyclic_value;
