//! Property-based tests for id assignment.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use super::ResourceStore;
use crate::domain::Notification;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every create receives an id strictly greater than any existing id,
    /// whatever ids the seed rows carried.
    #[test]
    fn prop_ids_strictly_increase(
        seed_ids in prop::collection::btree_set(1i32..1_000, 0..20),
        creates in 1usize..20,
    ) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let seeds = seed_ids
            .iter()
            .map(|&id| Notification { notification_id: id, ..Notification::default() })
            .collect();
        let mut store = ResourceStore::with_records(seeds);

        let mut last = seed_ids.iter().max().copied().unwrap_or(0);
        for _ in 0..creates {
            let created = store.create(Notification::default(), now).unwrap();
            prop_assert!(created.notification_id > last);
            prop_assert_eq!(created.notification_id, last + 1);
            last = created.notification_id;
        }
        prop_assert_eq!(store.len(), seed_ids.len() + creates);
    }

    /// Removing records never lets a create reuse a surviving record's id.
    #[test]
    fn prop_ids_unique_after_deletes(
        creates in 1usize..15,
        delete_mask in prop::collection::vec(any::<bool>(), 15),
    ) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut store = ResourceStore::<crate::domain::Account>::new();
        for i in 0..creates {
            let account = crate::domain::Account {
                account_number: format!("ACC{i:03}"),
                ..crate::domain::Account::default()
            };
            store.create(account, now).unwrap();
        }
        for (i, delete) in delete_mask.iter().take(creates).enumerate() {
            if *delete {
                store.delete_by_key(&format!("ACC{i:03}")).unwrap();
            }
        }
        let created = store
            .create(
                crate::domain::Account {
                    account_number: "NEW".into(),
                    ..crate::domain::Account::default()
                },
                now,
            )
            .unwrap();
        let duplicates = store
            .list()
            .iter()
            .filter(|a| a.account_id == created.account_id)
            .count();
        prop_assert_eq!(duplicates, 1);
    }
}
