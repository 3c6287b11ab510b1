//! Wuxing, the Five Elements, and the generating/overcoming cycle between them.
//!
//! The ring order Wood, Fire, Earth, Metal, Water is the generating order:
//! each element generates the next one and overcomes the one after that.

use crate::cyclic::{Cyclic, impl_cyclic_value};

/// One of the Five Elements. Stored as a 0-based position, Wood = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wuxing(u8);

/// How one element relates to another in the generating/overcoming cycle.
///
/// The discriminant is the ring offset from the first element to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WuxingRelationship {
    /// Both are the same element.
    Same = 0,
    /// The first generates the second, e.g. Wood generates Fire.
    Generates = 1,
    /// The first overcomes the second, e.g. Wood overcomes Earth.
    Overcomes = 2,
    /// The first is overcome by the second, e.g. Wood by Metal.
    OvercomeBy = 3,
    /// The first is generated by the second, e.g. Wood by Water.
    GeneratedBy = 4,
}

impl WuxingRelationship {
    /// Ring offset that leads from an element to its related element.
    pub fn offset(self) -> i32 {
        self as i32
    }

    fn from_offset(offset: usize) -> Self {
        match offset % Wuxing::MODULUS {
            0 => WuxingRelationship::Same,
            1 => WuxingRelationship::Generates,
            2 => WuxingRelationship::Overcomes,
            3 => WuxingRelationship::OvercomeBy,
            _ => WuxingRelationship::GeneratedBy,
        }
    }
}

impl Wuxing {
    pub const WOOD: Wuxing = Wuxing(0);
    pub const FIRE: Wuxing = Wuxing(1);
    pub const EARTH: Wuxing = Wuxing(2);
    pub const METAL: Wuxing = Wuxing(3);
    pub const WATER: Wuxing = Wuxing(4);

    /// Classifies how `self` relates to `other`.
    pub fn relationship_to(self, other: Wuxing) -> WuxingRelationship {
        let offset = (other.position() + Self::MODULUS - self.position()) % Self::MODULUS;
        WuxingRelationship::from_offset(offset)
    }

    /// The element standing in `relationship` to `self`.
    pub fn with_relationship(self, relationship: WuxingRelationship) -> Wuxing {
        self + relationship.offset()
    }
}

impl Cyclic for Wuxing {
    const MODULUS: usize = 5;
    const NAME: &'static str = "Wuxing";
    const LATIN: &'static [&'static str] = &["Wood", "Fire", "Earth", "Metal", "Water"];
    const CHINESE: &'static [&'static str] = &["木", "火", "土", "金", "水"];
    const NUMBERED: bool = false;

    fn from_position(position: usize) -> Self {
        Wuxing((position % Self::MODULUS) as u8)
    }

    fn position(self) -> usize {
        self.0 as usize
    }
}

impl_cyclic_value!(Wuxing);

/// Interprets the integer as a 1-based index, so `1` is Wood.
impl From<i32> for Wuxing {
    fn from(index: i32) -> Self {
        Wuxing::from_index(i64::from(index))
    }
}

/// The 1-based index.
impl From<Wuxing> for i32 {
    fn from(value: Wuxing) -> Self {
        value.index() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormatError;

    #[test]
    fn test_relationship_to() {
        assert_eq!(
            Wuxing::WOOD.relationship_to(Wuxing::WOOD),
            WuxingRelationship::Same
        );
        assert_eq!(
            Wuxing::WOOD.relationship_to(Wuxing::FIRE),
            WuxingRelationship::Generates
        );
        assert_eq!(
            Wuxing::WOOD.relationship_to(Wuxing::EARTH),
            WuxingRelationship::Overcomes
        );
        assert_eq!(
            Wuxing::WOOD.relationship_to(Wuxing::METAL),
            WuxingRelationship::OvercomeBy
        );
        assert_eq!(
            Wuxing::WOOD.relationship_to(Wuxing::WATER),
            WuxingRelationship::GeneratedBy
        );
        assert_eq!(
            Wuxing::WATER.relationship_to(Wuxing::FIRE),
            WuxingRelationship::Overcomes
        );
        assert_eq!(
            Wuxing::FIRE.relationship_to(Wuxing::METAL),
            WuxingRelationship::Overcomes
        );
    }

    #[test]
    fn test_with_relationship_is_inverse() {
        let relationships = [
            WuxingRelationship::Same,
            WuxingRelationship::Generates,
            WuxingRelationship::Overcomes,
            WuxingRelationship::OvercomeBy,
            WuxingRelationship::GeneratedBy,
        ];
        for wuxing in Wuxing::all() {
            for relationship in relationships {
                let related = wuxing.with_relationship(relationship);
                assert_eq!(wuxing.relationship_to(related), relationship);
            }
        }
        assert_eq!(
            Wuxing::WOOD.with_relationship(WuxingRelationship::GeneratedBy),
            Wuxing::WATER
        );
    }

    #[test]
    fn test_offsets_and_i32() {
        assert_eq!(Wuxing::from(1), Wuxing::WOOD);
        assert_eq!(Wuxing::from(0), Wuxing::WATER);
        assert_eq!(Wuxing::from(7), Wuxing::FIRE);
        assert_eq!(Wuxing::from(-2), Wuxing::EARTH);
        assert_eq!(i32::from(Wuxing::WATER), 5);
        assert_eq!(Wuxing::WATER + 1, Wuxing::WOOD);
        assert_eq!(Wuxing::WOOD - 1, Wuxing::WATER);
        assert_eq!(Wuxing::EARTH.next(-7), Wuxing::WOOD);
        assert_eq!(Wuxing::METAL.index(), 4);
    }

    #[test]
    fn test_i32_matches_index() {
        for wuxing in Wuxing::all() {
            assert_eq!(i32::from(wuxing) as usize, wuxing.index());
            assert_eq!(Wuxing::from(i32::from(wuxing)), wuxing);
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(Wuxing::METAL.to_string(), "Metal");
        assert_eq!(format!("{:#}", Wuxing::METAL), "金");
        assert_eq!(Wuxing::FIRE.to_string_with("C").unwrap(), "火");
        assert_eq!(
            Wuxing::FIRE.to_string_with("N"),
            Err(FormatError::UnsupportedSpecifier("N".to_string()))
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(" metal \t\n".parse::<Wuxing>(), Ok(Wuxing::METAL));
        assert_eq!(" 木 \t\n".parse::<Wuxing>(), Ok(Wuxing::WOOD));
        assert_eq!("WATER".parse::<Wuxing>(), Ok(Wuxing::WATER));
        assert_eq!(Wuxing::try_parse("1"), None);
        assert_eq!(Wuxing::try_parse("mu"), None);
        assert!("gold".parse::<Wuxing>().is_err());
    }
}
