use proptest::prelude::*;
use serde_json::json;
use simplejson::Value;

fn scalar() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(json!(null)),
        any::<bool>().prop_map(|b| json!(b)),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(|s| json!(s)),
    ]
}

fn tree() -> impl Strategy<Value = serde_json::Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|map| serde_json::Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn set_then_get_yields_stored_value(key in "[a-z]{1,6}", stored in tree()) {
        let v = Value::new();
        v.set(key.as_str(), stored.clone());
        prop_assert_eq!(v.get(&key).to_json(), stored);
    }

    #[test]
    fn insert_and_del_index_are_inverse(
        items in prop::collection::vec(tree(), 0..6),
        stored in tree(),
        at in any::<prop::sample::Index>(),
    ) {
        let original = serde_json::Value::Array(items);
        let v = Value::from(original.clone());
        let n = v.len();
        let i = at.index(n + 1);
        v.insert(i, stored.clone());
        prop_assert_eq!(v.len(), n + 1);
        prop_assert_eq!(v.get_index(i).to_json(), stored);
        v.del_index(i).unwrap();
        prop_assert_eq!(v.to_json(), original);
    }

    #[test]
    fn deep_clone_is_equal(doc in tree()) {
        let v = Value::from(doc.clone());
        prop_assert_eq!(v.deep_clone().to_json(), doc);
    }
}
