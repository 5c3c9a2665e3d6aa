//! Strongly-typed identifier newtypes.
//!
//! Each entity kind mints its own identifier with [`domain_id!`] so ids are
//! never interchangeable across kinds. The wrapped value is a UUID (v7,
//! time-ordered) and equality/hashing go by that value.

/// Define a UUID-wrapping identifier newtype.
///
/// Generates the constructor, conversions, `Display` and a `FromStr` that
/// fails with [`DomainError::InvalidValue`](crate::DomainError) carrying the
/// type name.
///
/// ```ignore
/// domain_id!(OrderId, "OrderId");
///
/// let id = OrderId::new();
/// let same: OrderId = id.to_string().parse().unwrap();
/// assert_eq!(id, same);
/// ```
#[macro_export]
macro_rules! domain_id {
    ($t:ident, $name:literal) => {
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(::uuid::Uuid);

        impl $t {
            /// Create a fresh identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing ids explicitly in
            /// tests for determinism.
            pub fn new() -> Self {
                Self(::uuid::Uuid::now_v7())
            }

            pub fn from_uuid(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<::uuid::Uuid> for $t {
            fn from(value: ::uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for ::uuid::Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = s
                    .parse::<::uuid::Uuid>()
                    .map_err(|_| $crate::DomainError::invalid_value($name))?;
                Ok(Self(uuid))
            }
        }
    };
}
