//! Property-Based Tests for the Store Module
//!
//! Exercises `MemoryStore` through the `KvStore` trait with generated keys and values.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::store::{KvStore, MemoryStore};

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:.-]{1,32}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,64}"
}

#[derive(Debug, Clone)]
enum StoreOp {
    Set { key: String, value: String },
    Get { key: String },
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| StoreOp::Set { key, value }),
        key_strategy().prop_map(|key| StoreOp::Get { key }),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A value written under a key is returned unchanged by the next read.
    #[test]
    fn prop_set_then_get_round_trips(key in key_strategy(), value in value_strategy()) {
        let rt = runtime();
        let store = MemoryStore::new();

        let read = rt.block_on(async {
            store.set(&key, &value).await.unwrap();
            store.get(&key).await.unwrap()
        });

        prop_assert_eq!(read, Some(value));
    }

    // Writing the same key twice leaves only the second value.
    #[test]
    fn prop_last_write_wins(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
    ) {
        let rt = runtime();
        let store = MemoryStore::new();

        let read = rt.block_on(async {
            store.set(&key, &first).await.unwrap();
            store.set(&key, &second).await.unwrap();
            store.get(&key).await.unwrap()
        });

        prop_assert_eq!(read, Some(second));
        prop_assert_eq!(rt.block_on(store.len()), 1);
    }

    // Any interleaving of operations agrees with a plain HashMap model.
    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(store_op_strategy(), 1..50)) {
        let rt = runtime();
        let store = MemoryStore::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                StoreOp::Set { key, value } => {
                    rt.block_on(store.set(&key, &value)).unwrap();
                    model.insert(key, value);
                }
                StoreOp::Get { key } => {
                    let read = rt.block_on(store.get(&key)).unwrap();
                    prop_assert_eq!(read, model.get(&key).cloned());
                }
            }
        }

        prop_assert_eq!(rt.block_on(store.len()), model.len());
    }
}
