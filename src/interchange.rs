//! String interchange for structured documents.
//!
//! Types implementing [StringConvertibleForJson] serialize as a single string
//! token holding their canonical text instead of a nested structure. Every
//! value type of this crate does so: JSON sees `"Jia"`, `"Wood"`, `"Yang"` or
//! `"110"`.
//!
//! Other types can reuse the bridge through `#[serde(with = "...")]`:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use yijing_primitives::interchange::StringConvertibleForJson;
//!
//! struct Count(usize);
//!
//! impl StringConvertibleForJson for Count {
//!     fn to_string_for_json(&self) -> String {
//!         "A".repeat(self.0)
//!     }
//!
//!     fn from_string_for_json(s: &str) -> Option<Self> {
//!         Some(Count(s.len()))
//!     }
//! }
//!
//! #[derive(Serialize, Deserialize)]
//! struct Tally {
//!     #[serde(with = "yijing_primitives::interchange::as_string")]
//!     count: Count,
//! }
//!
//! let json = serde_json::to_string(&Tally { count: Count(3) }).unwrap();
//! assert_eq!(json, r#"{"count":"AAA"}"#);
//! ```

use std::{any, fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Unexpected, Visitor},
};

use crate::{
    cyclic::Cyclic, dizhi::Dizhi, gua::Gua, tiangan::Tiangan, wuxing::Wuxing, yinyang::Yinyang,
};

/// A value with a lossless canonical string form.
pub trait StringConvertibleForJson: Sized {
    /// The canonical string.
    fn to_string_for_json(&self) -> String;

    /// Rebuilds a value from its canonical string, `None` if `s` is not one.
    fn from_string_for_json(s: &str) -> Option<Self>;
}

/// Writes `value` as a plain string token.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: StringConvertibleForJson,
    S: Serializer,
{
    serializer.serialize_str(&value.to_string_for_json())
}

/// Reads a string token and rebuilds the value. A string that is not in
/// canonical form, or a non-string token, is a data-format error.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: StringConvertibleForJson,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(CanonicalStringVisitor(PhantomData))
}

/// `serialize`/`deserialize` pair for `#[serde(with = "...")]`.
pub mod as_string {
    pub use super::{deserialize, serialize};
}

struct CanonicalStringVisitor<T>(PhantomData<T>);

impl<'de, T: StringConvertibleForJson> Visitor<'de> for CanonicalStringVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a canonical {} string", short_type_name::<T>())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::from_string_for_json(v).ok_or_else(|| {
            tracing::debug!(
                target_type = short_type_name::<T>(),
                input = v,
                "string field is not in canonical form"
            );
            E::invalid_value(Unexpected::Str(v), &self)
        })
    }
}

fn short_type_name<T>() -> &'static str {
    let name = any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

impl StringConvertibleForJson for Yinyang {
    fn to_string_for_json(&self) -> String {
        self.latin().to_string()
    }

    fn from_string_for_json(s: &str) -> Option<Self> {
        Yinyang::try_parse(s)
    }
}

impl StringConvertibleForJson for Gua {
    fn to_string_for_json(&self) -> String {
        self.to_string()
    }

    fn from_string_for_json(s: &str) -> Option<Self> {
        Gua::try_parse(s)
    }
}

macro_rules! impl_string_interchange {
    ($($ty:ident),+ $(,)?) => {$(
        impl StringConvertibleForJson for $ty {
            fn to_string_for_json(&self) -> String {
                self.latin().to_string()
            }

            fn from_string_for_json(s: &str) -> Option<Self> {
                <$ty as Cyclic>::try_parse(s)
            }
        }
    )+};
}

impl_string_interchange!(Tiangan, Dizhi, Wuxing);

macro_rules! impl_serde_via_string {
    ($($ty:ident),+ $(,)?) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serialize(self, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserialize(deserializer)
            }
        }
    )+};
}

impl_serde_via_string!(Yinyang, Gua, Tiangan, Dizhi, Wuxing);
