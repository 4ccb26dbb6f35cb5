use rs2_lazy::stream::{from_array, infinite, singleton, Enumerator, FromArray, Stream, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_from_array_round_trip() {
    let items = vec!["a", "b", "c"];
    assert_eq!(from_array(items.clone()).to_array(), items);
}

#[test]
fn test_from_array_empty() {
    let stream = from_array(Vec::<i32>::new());
    assert!(stream.is_empty());
    assert_eq!(stream.to_array(), Vec::<i32>::new());
    assert_eq!(stream.enumerator().move_next(), None);
}

#[test]
fn test_from_array_takes_a_snapshot() {
    let mut items = vec![1, 2, 3];
    let stream = from_array(items.clone());
    items.push(4);
    items[0] = 100;
    assert_eq!(stream.to_array(), vec![1, 2, 3]);
}

#[test]
fn test_from_array_conversions() {
    let collected: FromArray<u8> = (1..=3).collect();
    assert_eq!(collected.to_array(), vec![1, 2, 3]);

    let converted = FromArray::from(vec![4, 5]);
    assert_eq!(converted.len(), 2);
    assert_eq!(converted.to_array(), vec![4, 5]);
}

#[test]
fn test_from_array_reset() {
    let stream = from_array(vec![10, 20]);
    let mut e = stream.enumerator();
    assert_eq!(e.move_next(), Some(10));
    assert_eq!(e.move_next(), Some(20));
    assert_eq!(e.move_next(), None);
    e.reset();
    assert_eq!(e.move_next(), Some(10));
}

#[test]
fn test_singleton() {
    let stream = singleton(5);
    assert_eq!(stream.to_array(), vec![5]);

    let mut e = stream.enumerator();
    assert_eq!(e.move_next(), Some(5));
    assert_eq!(e.move_next(), None);
    assert_eq!(e.move_next(), None);
}

#[test]
fn test_singleton_matches_one_element_array() {
    assert_eq!(singleton("x").to_array(), from_array(["x"]).to_array());
}

#[test]
fn test_infinite_first_elements() {
    let squares = infinite(|i| i * i);
    let first: Vec<usize> = squares.iter().take(6).collect();
    assert_eq!(first, vec![0, 1, 4, 9, 16, 25]);
}

#[test]
fn test_infinite_never_exhausts() {
    let stream = infinite(|i| i % 3);
    let mut e = stream.enumerator();
    for i in 0..1_000 {
        assert_eq!(e.move_next(), Some(i % 3));
    }
}

#[test]
fn test_infinite_reset_calls_generator_again() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let stream = infinite(move |i| {
        counter.fetch_add(1, Ordering::SeqCst);
        i * 2
    });

    let mut e = stream.enumerator();
    assert_eq!(e.move_next(), Some(0));
    assert_eq!(e.move_next(), Some(2));
    assert_eq!(e.move_next(), Some(4));
    e.reset();
    assert_eq!(e.move_next(), Some(0));
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_infinite_with_impure_generator_does_not_replay() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let stream = infinite(move |i| i + counter.fetch_add(1, Ordering::SeqCst));

    let mut e = stream.enumerator();
    assert_eq!(e.move_next(), Some(0));
    assert_eq!(e.move_next(), Some(2));
    e.reset();
    assert_eq!(e.move_next(), Some(2));
}

#[test]
fn test_infinite_through_combinators() {
    let stream = infinite(|i| i as u64)
        .filter(|x| x % 7 == 0)
        .map(|x| x / 7);
    let first: Vec<u64> = stream.iter().take(5).collect();
    assert_eq!(first, vec![0, 1, 2, 3, 4]);

    // A fresh enumerator starts over.
    let again: Vec<u64> = stream.iter().take(2).collect();
    assert_eq!(again, vec![0, 1]);
}
