//! Property-based tests for the codec and collection operations.
//!
//! These tests use proptest to generate random collections and verify that
//! the invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::codec::{decode, encode, encode_record};
    use crate::collection::{add, exists, find_by_id, remove_by_id};
    use crate::error::Error;
    use crate::model::User;
    use proptest::collection::btree_map;
    use proptest::prelude::*;

    /// Collections with unique ids, in arbitrary insertion order.
    fn users() -> impl Strategy<Value = Vec<User>> {
        btree_map("[a-z0-9]{1,8}", ("[a-z]{1,8}@[a-z]{1,6}\\.com", any::<u64>()), 0..12)
            .prop_map(|entries| {
                entries
                    .into_iter()
                    .map(|(id, (email, age))| User { id, email, age })
                    .collect::<Vec<_>>()
            })
            .prop_shuffle()
    }

    proptest! {
        /// Property: decoding an encoded collection yields the same collection
        #[test]
        fn codec_round_trip(users in users()) {
            let data = encode(&users).unwrap();
            prop_assert_eq!(decode(&data).unwrap(), users);
        }

        /// Property: adding an existing id always conflicts
        #[test]
        fn add_existing_id_conflicts(users in users(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!users.is_empty());
            let existing = &users[pick.index(users.len())];
            let item = String::from_utf8(
                encode_record(&User::new(existing.id.clone(), "other@x.com", 1)).unwrap(),
            )
            .unwrap();

            let err = add(&item, users.clone()).unwrap_err();
            let conflict = matches!(err, Error::Conflict { .. });
            prop_assert!(conflict, "expected conflict, got {:?}", err);
        }

        /// Property: adding a fresh id appends it and keeps the rest in order
        #[test]
        fn add_fresh_id_appends(users in users()) {
            let fresh = User::new("NEW-ID", "new@x.com", 5);
            let item = String::from_utf8(encode_record(&fresh).unwrap()).unwrap();

            let result = add(&item, users.clone()).unwrap();
            prop_assert_eq!(&result[..users.len()], &users[..]);
            prop_assert_eq!(result.last(), Some(&fresh));
        }

        /// Property: after a successful remove the id no longer exists
        #[test]
        fn remove_is_complete(users in users(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!users.is_empty());
            let id = users[pick.index(users.len())].id.clone();

            let result = remove_by_id(&id, users.clone()).unwrap();
            prop_assert!(!exists(&id, &result));
            prop_assert_eq!(result.len(), users.len() - 1);
        }

        /// Property: every stored id finds its own record
        #[test]
        fn find_returns_matching_record(users in users()) {
            for user in &users {
                prop_assert_eq!(find_by_id(&user.id, &users), Some(user));
            }
            prop_assert_eq!(find_by_id("NOT-PRESENT", &users), None);
        }
    }
}
