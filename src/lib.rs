//! # yijing-primitives
//!
//! Primitive value types of Chinese calendrical and divination systems:
//! the Heavenly Stems ([Tiangan]), Earthly Branches ([Dizhi]), Five Elements
//! ([Wuxing]), the Yin/Yang polarity ([Yinyang]) and line sequences ([Gua]).
//!
//! All types are immutable values. The cyclic types normalize any integer onto
//! their ring, so offset arithmetic never fails. A Gua converts losslessly to
//! a `0`/`1` string and to a compact, self-delimiting byte form.
//!
//! With the `serde` feature (on by default), every type serializes as a
//! single string field; see [interchange].
//!
//! ## Example
//!
//! ```
//! use yijing_primitives::{Dizhi, Gua, Wuxing, WuxingRelationship, Yinyang};
//!
//! let hai: Dizhi = " hai ".parse().unwrap();
//! assert_eq!(hai + 1, Dizhi::ZI);
//! assert_eq!(format!("{hai:#}"), "亥");
//!
//! let water = Wuxing::WOOD.with_relationship(WuxingRelationship::GeneratedBy);
//! assert_eq!(water, Wuxing::WATER);
//!
//! let dui = Gua::from([Yinyang::YANG, Yinyang::YANG, Yinyang::YIN]);
//! assert_eq!(dui.to_string(), "110");
//! assert_eq!(Gua::from_bytes(&dui.to_bytes()), dui);
//! ```

mod bits;
pub mod cyclic;
pub mod dizhi;
pub mod errors;
pub mod gua;
#[cfg(feature = "serde")]
pub mod interchange;
pub mod tiangan;
pub mod wuxing;
pub mod yinyang;

pub use cyclic::{Cyclic, LabelStyle};
pub use dizhi::Dizhi;
pub use errors::{ArithmeticError, FormatError, IndexError};
pub use gua::Gua;
#[cfg(feature = "serde")]
pub use interchange::StringConvertibleForJson;
pub use tiangan::Tiangan;
pub use wuxing::{Wuxing, WuxingRelationship};
pub use yinyang::Yinyang;
