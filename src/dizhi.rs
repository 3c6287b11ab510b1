//! Dizhi, the twelve Earthly Branches.

use crate::cyclic::{Cyclic, impl_cyclic_value};

/// An Earthly Branch. Stored as a 0-based position, Zi = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dizhi(u8);

impl Dizhi {
    pub const ZI: Dizhi = Dizhi(0);
    pub const CHOU: Dizhi = Dizhi(1);
    pub const YIN: Dizhi = Dizhi(2);
    pub const MAO: Dizhi = Dizhi(3);
    pub const CHEN: Dizhi = Dizhi(4);
    pub const SI: Dizhi = Dizhi(5);
    pub const WU: Dizhi = Dizhi(6);
    pub const WEI: Dizhi = Dizhi(7);
    pub const SHEN: Dizhi = Dizhi(8);
    pub const YOU: Dizhi = Dizhi(9);
    pub const XU: Dizhi = Dizhi(10);
    pub const HAI: Dizhi = Dizhi(11);

    /// Steps needed to walk forward from `other` to `self`, in `[0, 12)`.
    pub fn steps_from(self, other: Dizhi) -> usize {
        (self.position() + Self::MODULUS - other.position()) % Self::MODULUS
    }
}

impl Cyclic for Dizhi {
    const MODULUS: usize = 12;
    const NAME: &'static str = "Dizhi";
    const LATIN: &'static [&'static str] = &[
        "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
    ];
    const CHINESE: &'static [&'static str] = &[
        "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
    ];
    const NUMBERED: bool = true;

    fn from_position(position: usize) -> Self {
        Dizhi((position % Self::MODULUS) as u8)
    }

    fn position(self) -> usize {
        self.0 as usize
    }
}

impl_cyclic_value!(Dizhi);

/// Distance between two branches; see [Dizhi::steps_from].
impl std::ops::Sub for Dizhi {
    type Output = usize;

    fn sub(self, rhs: Dizhi) -> usize {
        self.steps_from(rhs)
    }
}

/// Interprets the integer as a 1-based index, so `1` is Zi.
impl From<i32> for Dizhi {
    fn from(index: i32) -> Self {
        Dizhi::from_index(i64::from(index))
    }
}

/// The 1-based index.
impl From<Dizhi> for i32 {
    fn from(value: Dizhi) -> Self {
        value.index() as i32
    }
}
