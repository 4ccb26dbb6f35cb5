use crate::stream::{BoxStream, StreamExt};

use std::sync::Arc;

/// A Pipe represents a stream transformation from one type to another.
/// It's a function from Stream[I] to Stream[O].
///
/// Applying a pipe only builds the transformed stream; nothing is enumerated.
pub struct Pipe<I, O> {
    f: Arc<dyn Fn(BoxStream<I>) -> BoxStream<O> + Send + Sync + 'static>,
}

impl<I, O> Clone for Pipe<I, O> {
    fn clone(&self) -> Self {
        Pipe {
            f: Arc::clone(&self.f),
        }
    }
}

impl<I, O> Pipe<I, O> {
    /// Create a new pipe from a function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(BoxStream<I>) -> BoxStream<O> + Send + Sync + 'static,
    {
        Pipe { f: Arc::new(f) }
    }

    /// Apply this pipe to a stream
    pub fn apply(&self, input: BoxStream<I>) -> BoxStream<O> {
        (self.f)(input)
    }
}

/// Create a pipe that applies the given function to each element
pub fn map<I, O, F>(f: F) -> Pipe<I, O>
where
    F: Fn(I) -> O + Send + Sync + Clone + 'static,
    I: 'static,
    O: 'static,
{
    Pipe::new(move |input: BoxStream<I>| input.map(f.clone()).boxed())
}

/// Create a pipe that filters elements based on the predicate
pub fn filter<I, F>(predicate: F) -> Pipe<I, I>
where
    F: Fn(&I) -> bool + Send + Sync + Clone + 'static,
    I: 'static,
{
    Pipe::new(move |input: BoxStream<I>| input.filter(predicate.clone()).boxed())
}

/// Compose two pipes together
pub fn compose<I, M, O>(p1: Pipe<I, M>, p2: Pipe<M, O>) -> Pipe<I, O>
where
    I: 'static,
    M: 'static,
    O: 'static,
{
    Pipe::new(move |input| p2.apply(p1.apply(input)))
}

/// Identity pipe that doesn't transform the stream
pub fn identity<I: 'static>() -> Pipe<I, I> {
    Pipe::new(|input| input)
}

/// Extension trait for pipes
pub trait PipeExt<I, O> {
    /// Compose this pipe with another pipe
    fn compose<P: 'static>(self, other: Pipe<O, P>) -> Pipe<I, P>;
}

impl<I: 'static, O: 'static> PipeExt<I, O> for Pipe<I, O> {
    fn compose<P: 'static>(self, other: Pipe<O, P>) -> Pipe<I, P> {
        compose(self, other)
    }
}
