//! Property tests for the query engine.
//!
//! These exercise `query` the way a saved-list view does: arbitrary saved
//! lists, arbitrary search text, every sort key in both directions.

use model::Candidate;
use proptest::prelude::*;
use query::{SortKey, query};

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z ]{1,6}")
}

fn candidate() -> impl Strategy<Value = Candidate> {
    (
        0u64..50,
        "[a-z]{1,6}",
        optional_text(),
        optional_text(),
        optional_text(),
        optional_text(),
    )
        .prop_map(|(id, login, full_name, location, email, company)| {
            let mut c = Candidate::new(id, login.clone(), format!("https://github.com/{login}"));
            c.full_name = full_name;
            c.user_location = location;
            c.contact_email = email;
            c.company_name = company;
            c
        })
}

fn sort_key() -> impl Strategy<Value = Option<SortKey>> {
    prop::option::of(prop::sample::select(SortKey::ALL.to_vec()))
}

proptest! {
    #[test]
    fn empty_query_preserves_list(list in prop::collection::vec(candidate(), 0..12)) {
        prop_assert_eq!(query(&list, "", None, true), list);
    }

    #[test]
    fn query_is_idempotent(
        list in prop::collection::vec(candidate(), 0..12),
        search in "[a-z]{0,2}",
        key in sort_key(),
        ascending in any::<bool>(),
    ) {
        let once = query(&list, &search, key, ascending);
        let twice = query(&once, &search, key, ascending);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn query_is_deterministic(
        list in prop::collection::vec(candidate(), 0..12),
        search in "[a-z]{0,2}",
        key in sort_key(),
        ascending in any::<bool>(),
    ) {
        prop_assert_eq!(
            query(&list, &search, key, ascending),
            query(&list, &search, key, ascending)
        );
    }

    #[test]
    fn query_never_invents_rows(
        list in prop::collection::vec(candidate(), 0..12),
        search in "[a-z]{0,2}",
        key in sort_key(),
    ) {
        let rows = query(&list, &search, key, true);
        prop_assert!(rows.len() <= list.len());
        for row in &rows {
            prop_assert!(list.contains(row));
        }
    }
}
