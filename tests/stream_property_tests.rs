use quickcheck::{quickcheck, TestResult};
use rs2_lazy::stream::{filter, from_array, infinite, map, to_array, Enumerator, Stream, StreamExt};

fn drain<E: Enumerator>(enumerator: &mut E) -> Vec<E::Item> {
    let mut items = Vec::new();
    while let Some(item) = enumerator.move_next() {
        items.push(item);
    }
    items
}

quickcheck! {
    fn prop_from_array_round_trip(xs: Vec<i64>) -> bool {
        to_array(&from_array(xs.clone())) == xs
    }

    fn prop_where_keeps_matching_subsequence(xs: Vec<i32>, modulus: u8) -> TestResult {
        if modulus == 0 {
            return TestResult::discard();
        }
        let m = i32::from(modulus);
        let expected: Vec<i32> = xs.iter().copied().filter(|x| x % m == 0).collect();
        let actual = to_array(&filter(from_array(xs), move |x: &i32| x % m == 0));
        TestResult::from_bool(actual == expected)
    }

    fn prop_map_is_element_wise(xs: Vec<i32>) -> bool {
        let expected: Vec<i64> = xs.iter().map(|&x| i64::from(x) * 3 - 1).collect();
        to_array(&map(from_array(xs), |x| i64::from(x) * 3 - 1)) == expected
    }

    fn prop_where_then_map_maps_only_accepted(xs: Vec<i32>) -> bool {
        let expected: Vec<i64> = xs
            .iter()
            .filter(|&&x| x > 0)
            .map(|&x| -i64::from(x))
            .collect();
        from_array(xs).filter(|x| *x > 0).map(|x| -i64::from(x)).to_array() == expected
    }

    fn prop_reset_replays_sequence(xs: Vec<u16>, consumed: usize) -> bool {
        let stream = from_array(xs).filter(|x| x % 3 != 0).map(|x| u32::from(x) + 1);
        let fresh = stream.to_array();

        let mut e = stream.enumerator();
        for _ in 0..consumed % (fresh.len() + 2) {
            e.move_next();
        }
        e.reset();
        drain(&mut e) == fresh
    }

    fn prop_exhausted_stays_exhausted(xs: Vec<u8>, extra: u8) -> bool {
        let stream = from_array(xs).map(|x| x / 2);
        let mut e = stream.enumerator();
        drain(&mut e);
        (0..extra).all(|_| e.move_next().is_none())
    }

    fn prop_infinite_prefix_matches_generator(k: u8) -> bool {
        let generator = |i: usize| i.wrapping_mul(2_654_435_761) % 1_000;
        let stream = infinite(generator);
        let prefix: Vec<usize> = stream.iter().take(usize::from(k)).collect();
        let expected: Vec<usize> = (0..usize::from(k)).map(generator).collect();
        prefix == expected
    }
}
