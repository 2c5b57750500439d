//! Declarative macros shared by the wire enumerations.

/// Generates a closed `u8`-backed enumeration with a wire name and a
/// description per variant.
///
/// The generated type gets `ALL`, `as_str`, `description`, `as_u8`,
/// `from_u8`, `from_wire`, `Display`, `FromStr` and serde support. It
/// serializes as its wire name and deserializes from either the wire name
/// or the numeric value.
///
/// # Example
///
/// ```rust,ignore
/// wire_enum! {
///     pub enum Side {
///         #[default]
///         Unspecified = 0 => "", "not set";
///         Buy = 1 => "BUY", "buy side";
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $wire:literal, $desc:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )*
        }

        impl $name {
            /// Every variant, in numeric order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Wire name used by the API.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)*
                }
            }

            /// Human-readable description.
            pub fn description(&self) -> &'static str {
                match self {
                    $($name::$variant => $desc,)*
                }
            }

            #[inline]
            pub fn as_u8(self) -> u8 {
                self as u8
            }

            pub fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)*
                    _ => None,
                }
            }

            pub fn from_wire(s: &str) -> Option<Self> {
                match s {
                    $($wire => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::FigiError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $name::from_wire(s).ok_or_else(|| {
                    $crate::error::FigiError::Decode(format!(
                        "unknown {}: {}",
                        stringify!($name),
                        s
                    ))
                })
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                struct WireVisitor;

                impl<'de> $crate::serde::de::Visitor<'de> for WireVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, "a {} name or number", stringify!($name))
                    }

                    fn visit_str<E>(self, v: &str) -> std::result::Result<$name, E>
                    where
                        E: $crate::serde::de::Error,
                    {
                        $name::from_wire(v).ok_or_else(|| {
                            E::unknown_variant(v, &[$($wire),*])
                        })
                    }

                    fn visit_u64<E>(self, v: u64) -> std::result::Result<$name, E>
                    where
                        E: $crate::serde::de::Error,
                    {
                        u8::try_from(v)
                            .ok()
                            .and_then($name::from_u8)
                            .ok_or_else(|| {
                                E::invalid_value($crate::serde::de::Unexpected::Unsigned(v), &self)
                            })
                    }

                    fn visit_i64<E>(self, v: i64) -> std::result::Result<$name, E>
                    where
                        E: $crate::serde::de::Error,
                    {
                        u8::try_from(v)
                            .ok()
                            .and_then($name::from_u8)
                            .ok_or_else(|| {
                                E::invalid_value($crate::serde::de::Unexpected::Signed(v), &self)
                            })
                    }
                }

                deserializer.deserialize_any(WireVisitor)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    wire_enum! {
        /// Test-only enumeration.
        pub enum Side {
            #[default]
            Unspecified = 0 => "", "not set";
            Buy = 1 => "BUY", "buy side";
            Sell = 2 => "SELL", "sell side";
        }
    }

    #[test]
    fn test_wire_enum_lookup() {
        assert_eq!(Side::ALL.len(), 3);
        assert_eq!(Side::from_u8(2), Some(Side::Sell));
        assert_eq!(Side::from_u8(3), None);
        assert_eq!(Side::from_wire("BUY"), Some(Side::Buy));
        assert_eq!(Side::Buy.description(), "buy side");
        assert_eq!(Side::default(), Side::Unspecified);
        assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
        assert!("HOLD".parse::<Side>().is_err());
    }

    #[test]
    fn test_wire_enum_serde() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::from_str::<Side>("\"SELL\"").unwrap(), Side::Sell);
        assert_eq!(serde_json::from_str::<Side>("1").unwrap(), Side::Buy);
        assert!(serde_json::from_str::<Side>("7").is_err());
        assert!(serde_json::from_str::<Side>("-1").is_err());
        assert!(serde_json::from_str::<Side>("\"HOLD\"").is_err());
    }
}
