use rs2_lazy::pipe;
use rs2_lazy::pipe::*;
use rs2_lazy::stream::{from_array, infinite, Enumerator, Stream, StreamExt};

#[test]
fn test_pipe_map() {
    let stream = from_array(vec![1, 2, 3, 4, 5]).boxed();
    let pipe = map(|x: i32| x * 2);

    let result = pipe.apply(stream).to_array();
    assert_eq!(result, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_pipe_filter() {
    let stream = from_array(vec![1, 2, 3, 4, 5]).boxed();
    let pipe = pipe::filter(|x: &i32| x % 2 == 0);

    let result = pipe.apply(stream).to_array();
    assert_eq!(result, vec![2, 4]);
}

#[test]
fn test_pipe_compose() {
    let stream = from_array(vec![1, 2, 3, 4, 5]).boxed();

    // Create pipes
    let double = pipe::map(|x: i32| x * 2);
    let even_only = pipe::filter(|x: &i32| x % 2 == 0);

    // Compose pipes: first double, then filter for even numbers
    let pipe = pipe::compose(double, even_only);

    let result = pipe.apply(stream).to_array();
    // After doubling, all numbers are even, so all should pass the filter
    assert_eq!(result, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_pipe_compose_order_matters() {
    let evens_then_triple = pipe::filter(|x: &i32| x % 2 == 0).compose(pipe::map(|x: i32| x * 3));
    let triple_then_evens = pipe::map(|x: i32| x * 3).compose(pipe::filter(|x: &i32| x % 2 == 0));

    let source = from_array(vec![1, 2, 3, 4, 5, 6]).boxed();
    assert_eq!(evens_then_triple.apply(source.clone()).to_array(), vec![6, 12, 18]);
    assert_eq!(triple_then_evens.apply(source).to_array(), vec![6, 12, 18]);

    let odd = from_array(vec![1, 3]).boxed();
    let evens_then_triple = pipe::filter(|x: &i32| x % 2 == 0).compose(pipe::map(|x: i32| x * 2));
    assert!(evens_then_triple.apply(odd).to_array().is_empty());
}

#[test]
fn test_pipe_identity() {
    let stream = from_array(vec![1, 2, 3, 4, 5]).boxed();
    let pipe = pipe::identity();

    let result = pipe.apply(stream).to_array();
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_pipe_type_change_and_reuse() {
    let describe = pipe::map(|x: usize| format!("item-{}", x));
    let first = describe.apply(from_array(vec![1, 2]).boxed()).to_array();
    let second = describe.clone().apply(from_array(vec![3]).boxed()).to_array();
    assert_eq!(first, vec!["item-1", "item-2"]);
    assert_eq!(second, vec!["item-3"]);
}

#[test]
fn test_pipe_over_infinite_stream_is_lazy() {
    let pipe = pipe::filter(|x: &usize| x % 10 == 0);
    let stream = pipe.apply(infinite(|i| i).boxed());
    let mut e = stream.enumerator();
    assert_eq!(e.move_next(), Some(0));
    assert_eq!(e.move_next(), Some(10));
    e.reset();
    assert_eq!(e.move_next(), Some(0));
}
