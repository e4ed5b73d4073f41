//! Macros for string-backed resource ID types.

/// Implements the string conversions shared by every resource ID type.
///
/// The type must provide an inherent `parse(&str) -> Result<Self, IdError>`
/// and a `Display` impl that produces the canonical ARM path. This generates:
/// - `FromStr` delegating to `parse`
/// - `Serialize` as the canonical string
/// - `Deserialize` from a string, rejecting malformed IDs
///
/// # Example
///
/// ```ignore
/// impl_string_id!(ScaleSetId);
///
/// let id: ScaleSetId = "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Compute/virtualMachineScaleSets/agents".parse()?;
/// ```
#[macro_export]
macro_rules! impl_string_id {
    ($name:ident) => {
        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
