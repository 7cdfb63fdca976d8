//! Property-based tests for the entity serialization contract.
//!
//! - Round-trip: from_persisted(to_mapping(e)).to_mapping() == to_mapping(e)
//! - Touch monotonicity: updated_at strictly increases on every touch

use hbnb_model::{Entity, ModelSchema, kinds};
use proptest::prelude::*;
use serde_json::Value;
use std::sync::Arc;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn attr_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z_]{0,15}").unwrap()
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 ]{0,40}").unwrap().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
    ]
}

fn schema_strategy() -> impl Strategy<Value = Arc<ModelSchema>> {
    prop::sample::select(kinds::builtin_schemas()).prop_map(Arc::new)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn mapping_roundtrip_is_exact(
        schema in schema_strategy(),
        attrs in prop::collection::btree_map(attr_name_strategy(), scalar_strategy(), 0..8),
    ) {
        let mut e = Entity::new(schema.clone());
        for (name, value) in attrs {
            if matches!(name.as_str(), "id" | "created_at" | "updated_at") {
                continue;
            }
            e.set(&name, value).unwrap();
        }
        let d = e.to_mapping();
        let rebuilt = Entity::from_persisted(schema, &d).unwrap();
        prop_assert_eq!(rebuilt.to_mapping(), d);
    }

    #[test]
    fn touch_is_monotonic(touches in 1usize..50) {
        let mut e = Entity::new(Arc::new(kinds::base_model()));
        let mut last = e.updated_at();
        for _ in 0..touches {
            e.touch();
            prop_assert!(e.updated_at() > last);
            last = e.updated_at();
        }
        prop_assert!(e.created_at() < e.updated_at());
    }
}
