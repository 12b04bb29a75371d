use std::collections::BTreeMap;

use proptest::prelude::*;

use stackplan::TagSet;

fn tag_map() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map("[A-Za-z]{1,8}", "[a-z0-9 -]{0,12}", 0..6)
}

proptest! {
    #[test]
    fn merge_last_write_wins(first in tag_map(), second in tag_map()) {
        let earlier: TagSet = first.clone().into();
        let later: TagSet = second.clone().into();
        let merged = TagSet::merged(&[&earlier, &later]);

        // Every key of the later source wins.
        for (key, value) in &second {
            prop_assert_eq!(merged.get(key), Some(value.as_str()));
        }
        // Keys only the earlier source had are preserved.
        for (key, value) in &first {
            if !second.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value.as_str()));
            }
        }
    }

    #[test]
    fn merge_never_invents_keys(first in tag_map(), second in tag_map()) {
        let earlier: TagSet = first.clone().into();
        let later: TagSet = second.clone().into();
        let merged = TagSet::merged(&[&earlier, &later]);

        for (key, _) in merged.iter() {
            prop_assert!(first.contains_key(key) || second.contains_key(key));
        }
    }

    #[test]
    fn merge_with_self_is_identity(map in tag_map()) {
        let set: TagSet = map.into();
        let merged = TagSet::merged(&[&set, &set]);

        prop_assert_eq!(merged, set);
    }
}
