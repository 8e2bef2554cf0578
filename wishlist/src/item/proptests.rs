//! Property-based tests for the viewer projection.

use super::{Item, ItemId};
use crate::UserId;
use proptest::prelude::*;

fn user_id_strategy() -> impl Strategy<Value = UserId> {
    (1i64..50).prop_map(UserId::new)
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (
        1i64..10_000,
        "[a-zA-Z ]{1,30}",
        prop::option::of("https://[a-z]{1,12}\\.example/[a-z0-9]{0,10}"),
        user_id_strategy(),
        prop::option::of(user_id_strategy()),
    )
        .prop_map(|(id, name, link, created_by, reserved_by)| Item {
            id: ItemId::new(id),
            name,
            link,
            created_by,
            reserved_by,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The flags are a pure function of (created_by, reserved_by, viewer)
    #[test]
    fn projection_flags_match_definition(item in item_strategy(), viewer in user_id_strategy()) {
        let view = item.view_for(viewer);

        prop_assert_eq!(view.is_own, item.created_by == viewer);
        prop_assert_eq!(view.is_reserved, item.reserved_by.is_some());
        prop_assert_eq!(view.is_reserved_by_us, item.reserved_by == Some(viewer));
    }

    // Reserved-by-us always implies reserved
    #[test]
    fn reserved_by_us_implies_reserved(item in item_strategy(), viewer in user_id_strategy()) {
        let view = item.view_for(viewer);
        prop_assert!(!view.is_reserved_by_us || view.is_reserved);
    }

    // Two viewers who are not the holder get identical projections apart from is_own,
    // so nothing in the view can tell them who holds the reservation
    #[test]
    fn non_holders_cannot_distinguish_holder(
        item in item_strategy(),
        a in user_id_strategy(),
        b in user_id_strategy(),
    ) {
        prop_assume!(item.reserved_by != Some(a) && item.reserved_by != Some(b));

        let view_a = item.view_for(a);
        let view_b = item.view_for(b);

        prop_assert_eq!(view_a.is_reserved, view_b.is_reserved);
        prop_assert_eq!(view_a.is_reserved_by_us, view_b.is_reserved_by_us);
        prop_assert_eq!(view_a.id, view_b.id);
        prop_assert_eq!(view_a.name, view_b.name);
    }

    // Borrowing and consuming projections agree
    #[test]
    fn view_for_matches_into_view(item in item_strategy(), viewer in user_id_strategy()) {
        let borrowed = item.view_for(viewer);
        let owned = item.into_view(viewer);
        prop_assert_eq!(borrowed, owned);
    }
}
