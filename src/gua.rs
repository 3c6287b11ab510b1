//! Gua: an immutable, ordered sequence of Yinyang lines (yaos).
//!
//! Index 0 is the lowest line. A Gua has three interchangeable forms:
//!
//! - the value itself, built from any sequence of [Yinyang];
//! - text, one `0` (Yin) or `1` (Yang) per yao, index 0 first;
//! - bytes, one bit per yao packed LSB-first and closed by a single `1`
//!   terminator bit, so any length survives the trip.
//!
//! ## Example
//!
//! ```
//! use yijing_primitives::gua::Gua;
//!
//! let dui: Gua = "110".parse().unwrap();
//! assert_eq!(dui.to_bytes(), vec![0b0000_1011]);
//! assert_eq!(Gua::from_bytes(&[0b0000_1011]), dui);
//! ```

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Copied,
    ops::{self, Index},
    slice,
    str::FromStr,
};

use crate::{
    bits::{BitReader, BitWriter},
    errors::{ArithmeticError, FormatError, IndexError},
    yinyang::Yinyang,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gua {
    yaos: Box<[Yinyang]>,
}

impl Gua {
    pub fn new(yaos: impl IntoIterator<Item = Yinyang>) -> Self {
        Gua {
            yaos: yaos.into_iter().collect(),
        }
    }

    /// Number of yaos.
    pub fn count(&self) -> usize {
        self.yaos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.yaos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Yinyang> {
        self.yaos.get(index).copied()
    }

    /// Checked access to the yao at `index`.
    pub fn yao(&self, index: usize) -> Result<Yinyang, IndexError> {
        self.get(index).ok_or(IndexError::OutOfRange {
            index,
            count: self.count(),
        })
    }

    pub fn iter(&self) -> Copied<slice::Iter<'_, Yinyang>> {
        self.yaos.iter().copied()
    }

    pub fn as_slice(&self) -> &[Yinyang] {
        &self.yaos
    }

    /// Parses a string of `0`/`1` characters, ignoring surrounding whitespace.
    /// Any other character rejects the whole input.
    pub fn try_parse(s: &str) -> Option<Gua> {
        s.trim()
            .chars()
            .map(|c| match c {
                '0' => Some(Yinyang::Yin),
                '1' => Some(Yinyang::Yang),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Gua::from)
    }

    /// Packs the yaos into bytes: one bit per yao (Yang = 1), index 0 in the
    /// least significant bit of the first byte, then a single `1` terminator
    /// bit, then zero padding. The output is `ceil((count + 1) / 8)` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BitWriter::with_capacity(self.count() + 1);
        for yao in self.iter() {
            writer.write_bit(yao.is_yang());
        }
        writer.write_bit(true);

        writer.into_bytes()
    }

    /// Inverse of [Gua::to_bytes]. The highest set bit is taken as the
    /// terminator; the bits below it become the yaos and everything from the
    /// terminator up is discarded. A buffer with no set bit decodes to the
    /// empty Gua.
    pub fn from_bytes(bytes: &[u8]) -> Gua {
        let mut reader = BitReader::new(bytes);

        let Some(terminator) = reader.last_set_bit() else {
            tracing::debug!(
                len = bytes.len(),
                "no terminator bit in gua bytes, decoding as empty"
            );
            return Gua::default();
        };

        let gua: Gua = std::iter::from_fn(|| reader.read_bit())
            .take(terminator)
            .map(Yinyang::from)
            .collect();

        tracing::trace!(count = gua.count(), "decoded gua from bytes");
        gua
    }

    /// Yao-wise AND. Both guas must have the same count.
    pub fn and(&self, other: &Gua) -> Result<Gua, ArithmeticError> {
        self.zip_with(other, |a, b| a & b)
    }

    /// Yao-wise OR. Both guas must have the same count.
    pub fn or(&self, other: &Gua) -> Result<Gua, ArithmeticError> {
        self.zip_with(other, |a, b| a | b)
    }

    /// Yao-wise XOR. Both guas must have the same count.
    pub fn xor(&self, other: &Gua) -> Result<Gua, ArithmeticError> {
        self.zip_with(other, |a, b| a ^ b)
    }

    fn zip_with(
        &self,
        other: &Gua,
        op: impl Fn(Yinyang, Yinyang) -> Yinyang,
    ) -> Result<Gua, ArithmeticError> {
        if self.count() != other.count() {
            return Err(ArithmeticError::CountMismatch {
                left: self.count(),
                right: other.count(),
            });
        }

        Ok(self.iter().zip(other.iter()).map(|(a, b)| op(a, b)).collect())
    }

    /// Folds the yaos from index 0 up as `hash = (hash << 1) + yao`, seeded at 1.
    /// Wraps on overflow.
    pub fn fold_hash(&self) -> i32 {
        self.iter()
            .fold(1i32, |acc, yao| (acc << 1).wrapping_add(i32::from(yao)))
    }
}

/// Shorter guas order first; equal counts compare from the highest yao down.
impl Ord for Gua {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count().cmp(&other.count()).then_with(|| {
            self.yaos
                .iter()
                .rev()
                .cmp(other.yaos.iter().rev())
        })
    }
}

impl PartialOrd for Gua {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Gua {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.fold_hash());
    }
}

/// Panics when `index` is out of range; see [Gua::yao] for the checked form.
impl Index<usize> for Gua {
    type Output = Yinyang;

    fn index(&self, index: usize) -> &Yinyang {
        &self.yaos[index]
    }
}

impl fmt::Display for Gua {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for yao in self.iter() {
            f.write_str(if yao.is_yang() { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Gua {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gua::try_parse(s).ok_or_else(|| FormatError::unparsable("Gua", s))
    }
}

impl ops::Not for &Gua {
    type Output = Gua;

    fn not(self) -> Gua {
        self.iter().map(|yao| !yao).collect()
    }
}

impl ops::Not for Gua {
    type Output = Gua;

    fn not(self) -> Gua {
        !&self
    }
}

impl FromIterator<Yinyang> for Gua {
    fn from_iter<I: IntoIterator<Item = Yinyang>>(iter: I) -> Self {
        Gua::new(iter)
    }
}

impl From<Vec<Yinyang>> for Gua {
    fn from(yaos: Vec<Yinyang>) -> Self {
        Gua {
            yaos: yaos.into_boxed_slice(),
        }
    }
}

impl From<&[Yinyang]> for Gua {
    fn from(yaos: &[Yinyang]) -> Self {
        Gua { yaos: yaos.into() }
    }
}

impl<const N: usize> From<[Yinyang; N]> for Gua {
    fn from(yaos: [Yinyang; N]) -> Self {
        Gua::new(yaos)
    }
}

impl<'a> IntoIterator for &'a Gua {
    type Item = Yinyang;
    type IntoIter = Copied<slice::Iter<'a, Yinyang>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
