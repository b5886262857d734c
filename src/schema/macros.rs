//! Declaration macros for records and wire enums.

/// Declare a record struct together with its static [`RecordSchema`].
///
/// Each field is written `name: RustType => kind`, where `kind` is a
/// [`ValueKind`] variant name, `Enum(SCHEMA)` / `Record(SCHEMA)` for
/// nested types, or any of those wrapped in `[...]` for a list. Fields
/// whose Rust type is an `Option` are optional on the wire.
///
/// ```
/// use prosper_rs::define_record;
/// use prosper_rs::decode::Amount;
///
/// define_record! {
///     /// A line item.
///     pub struct Item as ITEM {
///         /// Item name
///         name: String => Str,
///         /// Unit price
///         price: Amount => Number,
///     }
/// }
///
/// define_record! {
///     /// A basket of items.
///     pub struct Basket as BASKET {
///         /// Items in the basket
///         items: Vec<Item> => [Record(ITEM)],
///         /// Optional note
///         note: Option<String> => Str,
///     }
/// }
///
/// assert_eq!(BASKET.field("note").map(|f| f.optional), Some(true));
/// ```
///
/// [`RecordSchema`]: crate::schema::RecordSchema
/// [`ValueKind`]: crate::schema::ValueKind
#[macro_export]
macro_rules! define_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $schema:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty => $kind:tt $( ( $arg:path ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Schema descriptor for [`", stringify!($name), "`].")]
        pub static $schema: $crate::schema::RecordSchema = $crate::schema::RecordSchema {
            name: stringify!($name),
            fields: &[
                $(
                    $crate::schema::FieldSchema {
                        name: stringify!($field),
                        kind: $crate::__field_kind!($kind $( ($arg) )?),
                        optional: <$ty as $crate::decode::FromNode>::OPTIONAL,
                    },
                )*
            ],
        };

        impl $crate::schema::Record for $name {
            fn schema() -> &'static $crate::schema::RecordSchema {
                &$schema
            }

            #[allow(unused_mut, unused_variables)]
            fn from_record(mut record: $crate::decode::RecordInstance) -> $crate::Result<Self> {
                Ok(Self {
                    $( $field: record.take(stringify!($field))?, )*
                })
            }
        }

        impl $crate::decode::FromNode for $name {
            fn from_node(node: $crate::decode::Node) -> $crate::Result<Self> {
                $crate::decode::record_from_node(node)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_kind {
    ([ $($inner:tt)+ ]) => {
        $crate::schema::FieldKind::List($crate::__value_kind!($($inner)+))
    };
    ($($inner:tt)+) => {
        $crate::schema::FieldKind::Single($crate::__value_kind!($($inner)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __value_kind {
    (Enum ( $schema:path )) => {
        $crate::schema::ValueKind::Enum(&$schema)
    };
    (Record ( $schema:path )) => {
        $crate::schema::ValueKind::Record(&$schema)
    };
    ($kind:ident) => {
        $crate::schema::ValueKind::$kind
    };
}

/// Declare a closed enum together with its static [`EnumSchema`].
///
/// The enum displays and serializes as its wire value, which is either a
/// string (`: Str`) or an integer (`: Int`) for every member.
///
/// ```
/// use prosper_rs::wire_enum;
/// use prosper_rs::schema::WireEnum;
///
/// wire_enum! {
///     /// Shirt sizes.
///     pub enum Size as SIZE: Int {
///         /// Small
///         Small = 1,
///         /// Large
///         Large = 3,
///     }
/// }
///
/// assert_eq!(Size::Large.to_string(), "3");
/// assert_eq!(Size::from_wire_str("1"), Some(Size::Small));
/// ```
///
/// [`EnumSchema`]: crate::schema::EnumSchema
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $schema:ident : $wty:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        #[doc = concat!("Schema descriptor for [`", stringify!($name), "`].")]
        pub static $schema: $crate::schema::EnumSchema = $crate::schema::EnumSchema {
            name: stringify!($name),
            members: &[
                $(
                    $crate::schema::EnumMemberSchema {
                        name: stringify!($variant),
                        wire: $crate::schema::Wire::$wty($wire),
                    },
                )*
            ],
        };

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),* ];
        }

        impl $crate::schema::WireEnum for $name {
            fn schema() -> &'static $crate::schema::EnumSchema {
                &$schema
            }

            fn members() -> &'static [Self] {
                Self::ALL
            }

            fn wire(self) -> $crate::schema::Wire {
                match self {
                    $( $name::$variant => $crate::schema::Wire::$wty($wire), )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&$crate::schema::WireEnum::wire(*self), f)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S: $crate::__private::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                match $crate::schema::WireEnum::wire(*self) {
                    $crate::schema::Wire::Str(value) => serializer.serialize_str(value),
                    $crate::schema::Wire::Int(value) => serializer.serialize_i64(value),
                }
            }
        }
    };
}
