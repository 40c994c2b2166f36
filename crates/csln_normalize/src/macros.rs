/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Declarative macros for the normalizer.

/// Generates a string-backed enum with `as_str` and `from_name` methods.
/// Preserves any doc comments and derive macros on the enum and its variants.
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( Self::$variant, )+];

            #[doc = "Returns the string value associated with this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }

            #[doc = "Looks up the variant for a string value."]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $val => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }
    }
}

/// Builds a [`FieldMapping`](crate::FieldMapping) from `key => value` pairs.
///
/// ```
/// use csln_normalize::{fields, FieldValue};
///
/// let mapping = fields! { "date" => "(July 2009)", "year" => 2009 };
/// assert_eq!(mapping["year"], FieldValue::Number(2009));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldMapping::new()
    };
    ($($key:expr => $val:expr),+ $(,)?) => {{
        let mut mapping = $crate::FieldMapping::new();
        $(
            mapping.insert(
                ::std::string::String::from($key),
                $crate::FieldValue::from($val),
            );
        )+
        mapping
    }};
}
