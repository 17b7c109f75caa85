use assoc::hashtable::{CharSum, HashTable, KeyHasher};

use std::collections::HashMap;

use quickcheck_macros::quickcheck;

use crate::{Key, Op};

/// Applies a set of operations to a table and a hashmap, checking that they agree along the
/// way.
fn do_ops<H: KeyHasher>(ops: &[Op<i16>], table: &mut HashTable<H>, map: &mut HashMap<String, f32>) {
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                table.insert(&k.as_string(), f32::from(*v));
                map.insert(k.as_string(), f32::from(*v));
            }
            Op::Delete(k) => {
                assert_eq!(table.delete(&k.as_string()), map.remove(&k.as_string()));
            }
            Op::Traverse => {
                let mut seen: Vec<(String, f32)> =
                    table.iter().map(|(k, v)| (k.to_owned(), v)).collect();
                let mut expected: Vec<(String, f32)> =
                    map.iter().map(|(k, v)| (k.clone(), *v)).collect();
                seen.sort_by(|a, b| a.0.cmp(&b.0));
                expected.sort_by(|a, b| a.0.cmp(&b.0));
                assert_eq!(seen, expected);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op<i16>>) -> bool {
    let mut table = HashTable::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut table, &mut map);
    table.len() == map.len() && map.iter().all(|(k, v)| table.get(k) == Some(*v))
}

#[quickcheck]
fn fuzz_tiny_table_with_weak_hash(ops: Vec<Op<i16>>) -> bool {
    // Three slots and a collision-prone hash keep the chains long.
    let mut table = HashTable::with_hasher(3, CharSum).unwrap();
    let mut map = HashMap::new();

    do_ops(&ops, &mut table, &mut map);
    let chained: usize = (0..table.capacity()).map(|i| table.chain_len(i)).sum();
    chained == map.len() && map.iter().all(|(k, v)| table.get(k) == Some(*v))
}

#[quickcheck]
fn insert_then_get(k: Key, v: i16) -> bool {
    let mut table = HashTable::new();
    table.insert(&k.as_string(), f32::from(v));

    table.get(&k.as_string()) == Some(f32::from(v))
}

#[quickcheck]
fn delete_leaves_other_keys(keys: Vec<Key>, victim: Key) -> bool {
    let mut table = HashTable::with_capacity(5).unwrap();
    for (i, k) in keys.iter().enumerate() {
        table.insert(&k.as_string(), i as f32);
    }
    let before: HashMap<String, f32> = table.iter().map(|(k, v)| (k.to_owned(), v)).collect();

    table.delete(&victim.as_string());
    table.delete(&victim.as_string());

    table.get(&victim.as_string()).is_none()
        && before
            .iter()
            .filter(|(k, _)| **k != victim.as_string())
            .all(|(k, v)| table.get(k) == Some(*v))
}
