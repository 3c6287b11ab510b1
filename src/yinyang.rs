//! Yinyang, the two-valued polarity every Gua line carries.
//!
//! Yang is treated as logical true, so the bitwise operators follow boolean
//! algebra, and Yin orders before Yang.

use std::{fmt, ops, str::FromStr};

use crate::{cyclic::LabelStyle, errors::FormatError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Yinyang {
    #[default]
    Yin,
    Yang,
}

impl Yinyang {
    pub const YIN: Yinyang = Yinyang::Yin;
    pub const YANG: Yinyang = Yinyang::Yang;

    pub fn new(is_yang: bool) -> Self {
        if is_yang { Yinyang::Yang } else { Yinyang::Yin }
    }

    pub fn is_yang(self) -> bool {
        self == Yinyang::Yang
    }

    pub fn is_yin(self) -> bool {
        self == Yinyang::Yin
    }

    pub fn latin(self) -> &'static str {
        match self {
            Yinyang::Yang => "Yang",
            Yinyang::Yin => "Yin",
        }
    }

    pub fn chinese(self) -> &'static str {
        match self {
            Yinyang::Yang => "阳",
            Yinyang::Yin => "阴",
        }
    }

    /// Renders with a format specifier, `G` or `C`.
    pub fn to_string_with(self, spec: &str) -> Result<String, FormatError> {
        match LabelStyle::from_specifier(spec)? {
            LabelStyle::Latin => Ok(self.latin().to_string()),
            LabelStyle::Chinese => Ok(self.chinese().to_string()),
            LabelStyle::Number => Err(FormatError::UnsupportedSpecifier(spec.to_string())),
        }
    }

    /// Accepts `Yang`/`Yin` in any case or `阳`/`阴`, ignoring surrounding whitespace.
    pub fn try_parse(s: &str) -> Option<Self> {
        let s = s.trim();
        [Yinyang::Yang, Yinyang::Yin]
            .into_iter()
            .find(|y| y.latin().eq_ignore_ascii_case(s) || y.chinese() == s)
    }
}

/// `Display` writes the Latin label, or the Chinese label with `{:#}`.
impl fmt::Display for Yinyang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.pad(self.chinese())
        } else {
            f.pad(self.latin())
        }
    }
}

impl FromStr for Yinyang {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Yinyang::try_parse(s).ok_or_else(|| FormatError::unparsable("Yinyang", s))
    }
}

impl From<bool> for Yinyang {
    fn from(is_yang: bool) -> Self {
        Yinyang::new(is_yang)
    }
}

impl From<Yinyang> for bool {
    fn from(value: Yinyang) -> Self {
        value.is_yang()
    }
}

/// Any non-zero integer is Yang.
impl From<i32> for Yinyang {
    fn from(value: i32) -> Self {
        Yinyang::new(value != 0)
    }
}

/// Yang is `1`, Yin is `0`.
impl From<Yinyang> for i32 {
    fn from(value: Yinyang) -> Self {
        i32::from(value.is_yang())
    }
}

impl ops::Not for Yinyang {
    type Output = Yinyang;

    fn not(self) -> Yinyang {
        Yinyang::new(!self.is_yang())
    }
}

impl ops::BitAnd for Yinyang {
    type Output = Yinyang;

    fn bitand(self, rhs: Yinyang) -> Yinyang {
        Yinyang::new(self.is_yang() & rhs.is_yang())
    }
}

impl ops::BitOr for Yinyang {
    type Output = Yinyang;

    fn bitor(self, rhs: Yinyang) -> Yinyang {
        Yinyang::new(self.is_yang() | rhs.is_yang())
    }
}

impl ops::BitXor for Yinyang {
    type Output = Yinyang;

    fn bitxor(self, rhs: Yinyang) -> Yinyang {
        Yinyang::new(self.is_yang() ^ rhs.is_yang())
    }
}
