//! Purpose: Declarative field tables that drive the generic record codec.
//! Exports: `Location`, `Shape`, `Describe`, `Field`, `Record`, and the `record!` macro.
//! Role: Replaces per-type marshaller/unmarshaller classes with one static table per record.
//! Invariants: Table order is declaration order and is the wire emission order.
//! Invariants: Wire names match exactly (case-sensitive); every record field is optional.

use super::{CodecResult, Decode, Encode};
use crate::json::JsonReader;
use std::fmt;

/// Where a request field travels when an operation is marshalled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Location {
    Body,
    Path,
    Query,
    Header,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Path => "path",
            Location::Query => "query",
            Location::Header => "header",
        }
    }
}

/// Type tag of a field, used for introspection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    String,
    Integer,
    Long,
    Boolean,
    Double,
    Timestamp,
    List(Box<Shape>),
    Map(Box<Shape>),
    Record(&'static str),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::String => f.write_str("string"),
            Shape::Integer => f.write_str("integer"),
            Shape::Long => f.write_str("long"),
            Shape::Boolean => f.write_str("boolean"),
            Shape::Double => f.write_str("double"),
            Shape::Timestamp => f.write_str("timestamp"),
            Shape::List(element) => write!(f, "list<{element}>"),
            Shape::Map(value) => write!(f, "map<string, {value}>"),
            Shape::Record(name) => f.write_str(name),
        }
    }
}

pub trait Describe {
    fn shape() -> Shape;
}

/// One row of a record's field table.
pub struct Field<R> {
    pub name: &'static str,
    pub location: Location,
    pub shape: fn() -> Shape,
    /// Present value of the field, if any.
    pub get: fn(&R) -> Option<&dyn Encode>,
    /// Decodes the reader's next value into the field.
    pub set: fn(&mut R, &mut JsonReader) -> CodecResult<()>,
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("shape", &(self.shape)())
            .finish()
    }
}

/// A typed record with a static field table.
///
/// Implementations are generated by [`record!`](crate::record); the codec
/// engine in [`crate::codec`] only ever talks to the table.
pub trait Record: Default + Encode + Decode + 'static {
    const TYPE_NAME: &'static str;

    fn fields() -> &'static [Field<Self>];

    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::fields().iter().find(|field| field.name == name)
    }
}

/// Declares a record struct and its field table.
///
/// ```
/// use std::collections::BTreeMap;
///
/// switchboard::record! {
///     /// A queue as seen by tests.
///     pub struct DemoQueue {
///         "InstanceId" in path => instance_id: String,
///         "Name" => name: String,
///         "Tags" => tags: BTreeMap<String, String>,
///     }
/// }
///
/// let queue = DemoQueue {
///     name: Some("Q1".to_string()),
///     ..DemoQueue::default()
/// };
/// let json = switchboard::codec::to_string(&queue).unwrap();
/// assert_eq!(json, r#"{"Name":"Q1"}"#);
/// ```
#[macro_export]
macro_rules! record {
    (@location) => { $crate::codec::Location::Body };
    (@location path) => { $crate::codec::Location::Path };
    (@location query) => { $crate::codec::Location::Query };
    (@location header) => { $crate::codec::Location::Header };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $wire:literal $(in $location:ident)? => $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: ::core::option::Option<$ty>,
            )*
        }

        impl $crate::codec::Record for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn fields() -> &'static [$crate::codec::Field<Self>] {
                static FIELDS: &[$crate::codec::Field<$name>] = &[
                    $(
                        $crate::codec::Field {
                            name: $wire,
                            location: $crate::record!(@location $($location)?),
                            shape: <$ty as $crate::codec::Describe>::shape,
                            get: |record| {
                                record
                                    .$field
                                    .as_ref()
                                    .map(|value| value as &dyn $crate::codec::Encode)
                            },
                            set: |record, reader| {
                                record.$field = <$ty as $crate::codec::Decode>::decode(reader)?;
                                Ok(())
                            },
                        },
                    )*
                ];
                FIELDS
            }
        }

        impl $crate::codec::Encode for $name {
            fn encode(
                &self,
                writer: &mut $crate::json::JsonWriter<'_>,
            ) -> $crate::codec::CodecResult<()> {
                $crate::codec::encode_record(self, writer)
            }
        }

        impl $crate::codec::Decode for $name {
            fn decode(
                reader: &mut $crate::json::JsonReader,
            ) -> $crate::codec::CodecResult<::core::option::Option<Self>> {
                $crate::codec::decode_record(reader)
            }
        }

        impl $crate::codec::Describe for $name {
            fn shape() -> $crate::codec::Shape {
                $crate::codec::Shape::Record(stringify!($name))
            }
        }
    };
}
