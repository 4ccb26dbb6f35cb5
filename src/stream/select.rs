//! Field selection: narrowing record-shaped elements to a subset of fields
//!
//! Two flavours are provided. [`Select`] is checked at compile time: the
//! narrowed type implements [`Projection`] for the source type, usually through
//! the [`projection!`](crate::projection) macro, so asking for a field the
//! source does not have fails to build. [`SelectFields`] works on anything
//! that serializes to a JSON object and checks the requested keys as each
//! element is pulled, yielding `Err(StreamError::MissingField)` for elements
//! that lack one.
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::core::{Enumerator, Stream};
use crate::error::{StreamError, StreamResult};

/// A record with named fields, as produced by [`SelectFields`].
pub type Record = serde_json::Map<String, Value>;

// ================================
// Compile-time selection
// ================================

/// A record type narrowed from `Source`.
pub trait Projection<Source>: Sized {
    /// The selected field names, in declaration order.
    const FIELDS: &'static [&'static str];

    fn project(source: Source) -> Self;
}

/// Declare a record type holding a subset of another record's fields, and its
/// [`Projection`] from that record.
///
/// Each field keeps the name and must keep the type it has on the source;
/// anything else is a compile error.
///
/// The generated struct always derives `Debug`, `Clone` and `PartialEq`.
/// Attributes written before `struct` are passed through, so add other derives
/// there (e.g. `#[derive(serde::Serialize)]`), but do not repeat those three.
///
/// ```
/// use rs2_lazy::prelude::*;
///
/// #[derive(Clone)]
/// struct Person {
///     name: String,
///     surname: String,
///     age: u32,
/// }
///
/// rs2_lazy::projection! {
///     struct FullName from Person {
///         name: String,
///         surname: String,
///     }
/// }
///
/// let people = from_array(vec![Person { name: "Ada".into(), surname: "Lovelace".into(), age: 36 }]);
/// let names = people.select::<FullName>().to_array();
/// assert_eq!(names[0].surname, "Lovelace");
/// ```
#[macro_export]
macro_rules! projection {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $source:ty {
            $($field_vis:vis $field:ident : $ty:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $($field_vis $field: $ty),+
        }

        impl $crate::stream::Projection<$source> for $name {
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn project(source: $source) -> Self {
                $name {
                    $($field: source.$field),+
                }
            }
        }
    };
}

/// Narrows every upstream element to the projection `P`.
pub struct Select<S, P> {
    upstream: S,
    _projection: PhantomData<fn() -> P>,
}

impl<S: Clone, P> Clone for Select<S, P> {
    fn clone(&self) -> Self {
        Select {
            upstream: self.upstream.clone(),
            _projection: PhantomData,
        }
    }
}

/// Lazily narrow each element of `upstream` to the fields of `P`.
pub fn select<P, S>(upstream: S) -> Select<S, P>
where
    S: Stream,
    P: Projection<S::Item>,
{
    Select {
        upstream,
        _projection: PhantomData,
    }
}

impl<S, P> Stream for Select<S, P>
where
    S: Stream,
    P: Projection<S::Item>,
{
    type Item = P;
    type Enumerator = SelectEnumerator<S::Enumerator, P>;

    fn enumerator(&self) -> Self::Enumerator {
        SelectEnumerator {
            inner: self.upstream.enumerator(),
            done: false,
            _projection: PhantomData,
        }
    }
}

pub struct SelectEnumerator<E, P> {
    inner: E,
    done: bool,
    _projection: PhantomData<fn() -> P>,
}

impl<E, P> Enumerator for SelectEnumerator<E, P>
where
    E: Enumerator,
    P: Projection<E::Item>,
{
    type Item = P;

    fn move_next(&mut self) -> Option<P> {
        if self.done {
            return None;
        }
        match self.inner.move_next() {
            Some(item) => Some(P::project(item)),
            None => {
                self.done = true;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.done = false;
        self.inner.reset();
    }
}

// ================================
// Run-time selection
// ================================

/// An ordered set of field names to keep.
///
/// Repeated names are kept once, at their first position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSet {
    keys: Vec<String>,
}

impl FieldSet {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut set = FieldSet::default();
        for key in keys {
            let key = key.into();
            if !set.keys.contains(&key) {
                set.keys.push(key);
            }
        }
        set
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Build a record holding exactly these fields of `value`, in set order.
    pub fn project(&self, value: Value) -> StreamResult<Record> {
        let mut source = match value {
            Value::Object(map) => map,
            other => {
                return Err(StreamError::NotARecord {
                    found: kind_of(&other),
                })
            }
        };
        let mut record = Record::with_capacity(self.keys.len());
        for key in &self.keys {
            let field = source
                .remove(key)
                .ok_or_else(|| StreamError::MissingField { field: key.clone() })?;
            record.insert(key.clone(), field);
        }
        Ok(record)
    }
}

impl<K: Into<String>> FromIterator<K> for FieldSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        FieldSet::new(iter)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Narrows every serializable upstream element to a [`FieldSet`].
pub struct SelectFields<S> {
    upstream: S,
    fields: Arc<FieldSet>,
}

impl<S: Clone> Clone for SelectFields<S> {
    fn clone(&self) -> Self {
        SelectFields {
            upstream: self.upstream.clone(),
            fields: Arc::clone(&self.fields),
        }
    }
}

impl<S> SelectFields<S> {
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }
}

/// Lazily narrow each element of `upstream` to `fields`.
///
/// Elements are serialized with `serde_json`; those that are not objects or
/// lack one of the fields come out as errors, the rest as new records holding
/// exactly the requested fields.
pub fn select_fields<S>(upstream: S, fields: FieldSet) -> SelectFields<S>
where
    S: Stream,
    S::Item: Serialize,
{
    SelectFields {
        upstream,
        fields: Arc::new(fields),
    }
}

impl<S> Stream for SelectFields<S>
where
    S: Stream,
    S::Item: Serialize,
{
    type Item = StreamResult<Record>;
    type Enumerator = SelectFieldsEnumerator<S::Enumerator>;

    fn enumerator(&self) -> Self::Enumerator {
        SelectFieldsEnumerator {
            inner: self.upstream.enumerator(),
            fields: Arc::clone(&self.fields),
            done: false,
        }
    }
}

pub struct SelectFieldsEnumerator<E> {
    inner: E,
    fields: Arc<FieldSet>,
    done: bool,
}

impl<E> Enumerator for SelectFieldsEnumerator<E>
where
    E: Enumerator,
    E::Item: Serialize,
{
    type Item = StreamResult<Record>;

    fn move_next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(item) = self.inner.move_next() else {
            self.done = true;
            return None;
        };
        let record = serde_json::to_value(&item)
            .map_err(StreamError::from)
            .and_then(|value| self.fields.project(value));
        if let Err(e) = &record {
            log::debug!("field selection failed: {}", e);
        }
        Some(record)
    }

    fn reset(&mut self) {
        self.done = false;
        self.inner.reset();
    }
}
