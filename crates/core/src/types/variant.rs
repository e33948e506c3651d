//! Cart variant selector ("selected memory").
//!
//! A cart row is keyed by `(user, product, variant)`, where the variant is an
//! optional product configuration such as a storage size. "No variant" is a
//! real, matchable key value: two adds without a variant hit the same row, and
//! an add with `"64GB"` creates a separate one. Queries must therefore compare
//! variants with `IS NOT DISTINCT FROM`, never with `=`.

use serde::{Deserialize, Deserializer, Serialize};

/// Optional variant selector for a cart row.
///
/// Empty strings are normalized to "no variant" so that `""` and `null` from
/// clients address the same row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Variant(Option<String>);

impl Variant {
    /// The "no variant" key.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Build a variant, treating empty input as "no variant".
    #[must_use]
    pub fn new(value: Option<String>) -> Self {
        Self(value.filter(|v| !v.is_empty()))
    }

    /// The selector text, if any.
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether this is the "no variant" key.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<String>> for Variant {
    fn from(value: Option<String>) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::new(Some(value.to_owned()))
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Variant {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Variant {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        <Option<String> as sqlx::Decode<sqlx::Postgres>>::decode(value).map(Self::new)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Variant {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Option<String> as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        selected_memory: Variant,
    }

    #[test]
    fn test_missing_field_is_none() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.selected_memory.is_none());
    }

    #[test]
    fn test_null_and_empty_are_the_same_key() {
        let null: Body = serde_json::from_str(r#"{"selected_memory":null}"#).unwrap();
        let empty: Body = serde_json::from_str(r#"{"selected_memory":""}"#).unwrap();
        assert_eq!(null.selected_memory, empty.selected_memory);
        assert_eq!(null.selected_memory, Variant::none());
    }

    #[test]
    fn test_named_variant_is_distinct_from_none() {
        let named: Body = serde_json::from_str(r#"{"selected_memory":"64GB"}"#).unwrap();
        assert_eq!(named.selected_memory.as_deref(), Some("64GB"));
        assert_ne!(named.selected_memory, Variant::none());
    }

    #[test]
    fn test_serializes_none_as_null() {
        assert_eq!(serde_json::to_string(&Variant::none()).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Variant::from("128GB")).unwrap(),
            "\"128GB\""
        );
    }
}
