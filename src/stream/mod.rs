//! Pull-based lazy streams
//!
//! Sources build base streams, combinators wrap one stream in another, and
//! terminal operations drain a fresh enumerator. Nothing is evaluated until an
//! enumerator is asked for its next element.

pub mod core;
pub mod constructors;
pub mod select;
pub mod utility;
pub mod boxed;

// Re-export core types
pub use self::core::{
    filter, map, Enumerator, Map, MapEnumerator, Stream, StreamExt, Where, WhereEnumerator,
};

// Re-export constructors
pub use constructors::{
    from_array, infinite, singleton, FromArray, FromArrayEnumerator, Infinite,
    InfiniteEnumerator, Singleton,
};

// Re-export field selection
pub use select::{
    select, select_fields, FieldSet, Projection, Record, Select, SelectEnumerator,
    SelectFields, SelectFieldsEnumerator,
};

// Re-export terminal operations
pub use utility::{to_array, to_array_with, to_array_with_metrics, Iter};

pub use boxed::{BoxEnumerator, BoxStream};
