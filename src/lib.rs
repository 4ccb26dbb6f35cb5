pub mod error;
pub mod stream;

pub mod pipe;

pub mod stream_configuration;
pub mod stream_performance_metrics;
pub mod result_stream_ext;

pub use error::{StreamError, StreamResult};
pub use result_stream_ext::ResultStreamExt;

/// Everything needed to build and drain streams.
pub mod prelude {
    pub use crate::error::{StreamError, StreamResult};
    pub use crate::result_stream_ext::ResultStreamExt;
    pub use crate::stream::{
        filter, from_array, infinite, map, select, select_fields, singleton, to_array,
        Enumerator, FieldSet, Projection, Record, Stream, StreamExt,
    };
    pub use crate::stream_configuration::{BufferConfig, GrowthStrategy};
}
