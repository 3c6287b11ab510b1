//! Tiangan, the ten Heavenly Stems.

use crate::cyclic::{Cyclic, impl_cyclic_value};

/// A Heavenly Stem. Stored as a 0-based position, Jia = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tiangan(u8);

impl Tiangan {
    pub const JIA: Tiangan = Tiangan(0);
    pub const YI: Tiangan = Tiangan(1);
    pub const BING: Tiangan = Tiangan(2);
    pub const DING: Tiangan = Tiangan(3);
    pub const WU: Tiangan = Tiangan(4);
    pub const JI: Tiangan = Tiangan(5);
    pub const GENG: Tiangan = Tiangan(6);
    pub const XIN: Tiangan = Tiangan(7);
    pub const REN: Tiangan = Tiangan(8);
    pub const GUI: Tiangan = Tiangan(9);

    /// Steps needed to walk forward from `other` to `self`, in `[0, 10)`.
    pub fn steps_from(self, other: Tiangan) -> usize {
        (self.position() + Self::MODULUS - other.position()) % Self::MODULUS
    }
}

impl Cyclic for Tiangan {
    const MODULUS: usize = 10;
    const NAME: &'static str = "Tiangan";
    const LATIN: &'static [&'static str] = &[
        "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
    ];
    const CHINESE: &'static [&'static str] =
        &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
    const NUMBERED: bool = true;

    fn from_position(position: usize) -> Self {
        Tiangan((position % Self::MODULUS) as u8)
    }

    fn position(self) -> usize {
        self.0 as usize
    }
}

impl_cyclic_value!(Tiangan);

/// Distance between two stems; see [Tiangan::steps_from].
impl std::ops::Sub for Tiangan {
    type Output = usize;

    fn sub(self, rhs: Tiangan) -> usize {
        self.steps_from(rhs)
    }
}

/// Interprets the integer as a 1-based index, so `1` is Jia.
impl From<i32> for Tiangan {
    fn from(index: i32) -> Self {
        Tiangan::from_index(i64::from(index))
    }
}

/// The 1-based index.
impl From<Tiangan> for i32 {
    fn from(value: Tiangan) -> Self {
        value.index() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormatError;

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Tiangan::from_index(1), Tiangan::JIA);
        assert_eq!(Tiangan::from_index(10), Tiangan::GUI);
        assert_eq!(Tiangan::from_index(11), Tiangan::JIA);
        assert_eq!(Tiangan::from_index(0), Tiangan::GUI);
        assert_eq!(Tiangan::from_index(-8), Tiangan::YI);
        assert_eq!(Tiangan::REN.index(), 9);
    }

    #[test]
    fn test_next_and_offsets() {
        assert_eq!(Tiangan::JIA.next(1), Tiangan::YI);
        assert_eq!(Tiangan::JIA.next(-1), Tiangan::GUI);
        assert_eq!(Tiangan::XIN + 5, Tiangan::BING);
        assert_eq!(Tiangan::BING - 5, Tiangan::XIN);
        assert_eq!(Tiangan::BING - i32::MIN, Tiangan::BING + 8);
        assert_eq!(Tiangan::WU + i32::MAX, Tiangan::WU + 7);
    }

    #[test]
    fn test_steps_from() {
        assert_eq!(Tiangan::BING.steps_from(Tiangan::JIA), 2);
        assert_eq!(Tiangan::JIA.steps_from(Tiangan::BING), 8);
        assert_eq!(Tiangan::GUI - Tiangan::GUI, 0);
        assert_eq!(Tiangan::JIA - Tiangan::GUI, 1);
    }

    #[test]
    fn test_format() {
        assert_eq!(Tiangan::GENG.to_string(), "Geng");
        assert_eq!(format!("{:#}", Tiangan::GENG), "庚");
        assert_eq!(Tiangan::GENG.to_string_with("c").unwrap(), "庚");
        assert_eq!(Tiangan::GENG.to_string_with("N").unwrap(), "7");
        assert_eq!(
            Tiangan::GENG.to_string_with("x"),
            Err(FormatError::UnsupportedSpecifier("x".to_string()))
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(" jIA \t".parse::<Tiangan>(), Ok(Tiangan::JIA));
        assert_eq!("癸".parse::<Tiangan>(), Ok(Tiangan::GUI));
        assert_eq!("10".parse::<Tiangan>(), Ok(Tiangan::GUI));
        assert_eq!(Tiangan::try_parse("11"), None);
        assert_eq!(Tiangan::try_parse("zi"), None);
        assert_eq!(
            "zi".parse::<Tiangan>(),
            Err(FormatError::Unparsable {
                target: "Tiangan",
                input: "zi".to_string()
            })
        );
    }

    #[test]
    fn test_every_label_parses_back() {
        for tiangan in Tiangan::all() {
            assert_eq!(tiangan.to_string().parse::<Tiangan>(), Ok(tiangan));
            assert_eq!(format!("{tiangan:#}").parse::<Tiangan>(), Ok(tiangan));
        }
        assert_eq!(Tiangan::all().count(), 10);
    }

    #[test]
    fn test_ordering_and_i32() {
        assert!(Tiangan::JIA < Tiangan::GUI);
        assert_eq!(Tiangan::from(3), Tiangan::BING);
        assert_eq!(i32::from(Tiangan::BING), 3);
    }
}
