//! Domain records shown by the dashboard pages.
//!
//! # Responsibility
//! - Define one flat record shape per legal-operations domain.
//! - Keep every categorical field a closed enum with a stable display label.
//!
//! # Invariants
//! - Records are immutable for the session once loaded.
//! - No cross-record references are validated (e.g. `parent_entity`).
//! - Enum labels match the fixture/display strings exactly.

/// Declares a closed enum whose variants carry a display label.
///
/// The label is used for serde, `Display`, and case-insensitive parsing.
/// Variant declaration order defines `Ord`, so severity-like enums must be
/// declared from lowest to highest.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $($(#[$vmeta])* #[serde(rename = $label)] $variant,)+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Display label, identical to the serialized form.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Parses a display label, ignoring ASCII case and outer whitespace.
            pub fn parse(value: &str) -> Option<Self> {
                let trimmed = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod common;
pub mod compliance;
pub mod contract;
pub mod dispute;
pub mod entity;
pub mod matter;
pub mod policy;
pub mod risk;
pub mod task;
pub mod vendor;
