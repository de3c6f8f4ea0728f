use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1_000;
const NUM_OF_WORDS: usize = 10_000;

// Short lowercase words drawn from a small alphabet so that most of them repeat.
fn random_words() -> Vec<String> {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_WORDS)
        .map(|_| {
            let len = rng.gen_range(1, 5);
            (0..len)
                .map(|_| (b'a' + rng.gen_range(0, 8u8)) as char)
                .collect()
        })
        .collect()
}

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(map.get(key));
            }
        })
    });
}

macro_rules! bst_map_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_trees::$module_name::$type_name;
                use balanced_trees::words;
                use rand::{Rng, SeedableRng, XorShiftRng};
                use super::{random_words, NUM_OF_OPERATIONS};
                use criterion::{Criterion, black_box};

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut map = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let key = rng.next_u32();
                            let val = rng.next_u32();

                            map.insert(key, val);
                        }
                    }));
                }

                pub fn bench_get(c: &mut Criterion) {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        let val = rng.next_u32();

                        map.insert(key, val);
                        values.push(key);
                    }

                    c.bench_function(&format!("bench {} get", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &values {
                            black_box(map.get(key));
                        }
                    }));
                }

                pub fn bench_count_words(c: &mut Criterion) {
                    let mut sorted_words = random_words();
                    sorted_words.sort();

                    c.bench_function(&format!("bench {} count words", stringify!($module_name)), move |b| b.iter(|| {
                        let mut map = $type_name::new();
                        words::count_words(&mut map, sorted_words.iter().cloned());
                        for word in &sorted_words {
                            black_box(map.contains_key(word.as_str()));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreemap_get,
            bench_btreemap_insert,
            $(
                $module_name::bench_get,
                $module_name::bench_insert,
                $module_name::bench_count_words,
            )*
        );
    }
}

bst_map_benches!(
    avl_tree: AvlMap,
    red_black_tree: RedBlackMap,
);

criterion_main!(benches);
