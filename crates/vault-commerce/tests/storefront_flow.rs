//! End-to-end checks of the catalog filter and cart ledger over the Vinyl Vault stock.

use vault_commerce::config::FilterLabels;
use vault_commerce::prelude::*;

/// Every filter state reachable from the selector controls, for a few queries.
fn all_filter_states(catalog: &Catalog) -> Vec<FilterState> {
    let facets = FacetOptions::from_catalog(catalog, &FilterLabels::default());
    let queries = ["", "the", "ROCK", "miles", "o", "zzz"];

    let mut states = Vec::new();
    for query in queries {
        for genre in &facets.genres {
            for year in &facets.years {
                for condition in &facets.conditions {
                    states.push(FilterState {
                        query: query.to_string(),
                        genre: Selector::parse(&genre.value, "genre").unwrap(),
                        year: Selector::parse(&year.value, "year").unwrap(),
                        condition: Selector::parse(&condition.value, "condition").unwrap(),
                    });
                }
            }
        }
    }
    states
}

fn is_subsequence(sub: &[RecordId], full: &[RecordId]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|id| rest.any(|candidate| candidate == id))
}

#[test]
fn filtered_list_is_ordered_subsequence_satisfying_every_predicate() {
    let catalog = Catalog::vinyl_vault();
    let all_ids: Vec<_> = catalog.iter().map(|r| r.id).collect();

    for state in all_filter_states(&catalog) {
        let results = state.apply(&catalog);
        assert!(is_subsequence(&results.ids(), &all_ids), "{state:?}");

        let needle = state.query.to_lowercase();
        for record in &results {
            assert!(
                record.title.to_lowercase().contains(&needle)
                    || record.artist.to_lowercase().contains(&needle)
            );
            assert!(state.genre.matches(&record.genre));
            assert!(state.year.matches(&record.year));
            assert!(state.condition.matches(&record.condition));
        }

        // Nothing that matches was dropped.
        let expected = catalog.iter().filter(|r| state.matches(r)).count();
        assert_eq!(results.len(), expected, "{state:?}");
    }
}

#[test]
fn filtering_is_idempotent() {
    let catalog = Catalog::vinyl_vault();

    for state in all_filter_states(&catalog) {
        let once = state.apply(&catalog);
        let twice = state.apply_to(&once);
        assert_eq!(once, twice, "{state:?}");
    }
}

#[test]
fn jazz_selects_only_kind_of_blue() {
    let mut store = Storefront::default();
    store.dispatch(Action::SetGenre("Jazz".to_string())).unwrap();

    let visible = store.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible.ids(), [RecordId::new(4)]);
    assert_eq!(visible.to_records()[0].title, "Kind of Blue");
}

#[test]
fn add_twice_then_set_quantity_five() {
    let id = RecordId::new(1);
    let store = Storefront::default()
        .reduce(Action::AddToCart(id))
        .reduce(Action::AddToCart(id))
        .reduce(Action::SetQuantity(id, 5));

    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(id).map(CartEntry::quantity), Some(5));
    assert_eq!(cart.total_price().amount, 12500);
    assert_eq!(cart.total_count(), 5);
}

#[test]
fn set_quantity_zero_then_remove_is_noop() {
    let id = RecordId::new(7);
    let mut store = Storefront::default().reduce(Action::AddToCart(id));

    store.dispatch(Action::SetQuantity(id, 0)).unwrap();
    assert!(store.cart().get(id).is_none());

    let before = store.clone();
    store.dispatch(Action::RemoveFromCart(id)).unwrap();
    assert_eq!(store, before);
}

#[test]
fn totals_track_every_mutation() {
    let catalog = Catalog::vinyl_vault();
    let script = [
        Action::AddToCart(RecordId::new(2)),
        Action::AddToCart(RecordId::new(8)),
        Action::AddToCart(RecordId::new(2)),
        Action::Increment(RecordId::new(8)),
        Action::SetQuantity(RecordId::new(5), 3),
        Action::AddToCart(RecordId::new(5)),
        Action::SetQuantity(RecordId::new(5), 4),
        Action::Decrement(RecordId::new(2)),
        Action::SetQuantity(RecordId::new(8), -1),
        Action::RemoveFromCart(RecordId::new(6)),
        Action::Decrement(RecordId::new(2)),
    ];

    let mut store = Storefront::default();
    assert_eq!(store.cart().total_count(), 0);
    assert!(store.cart().total_price().is_zero());

    for action in script {
        store = store.reduce(action);
        let cart = store.cart();

        let count: u64 = cart.entries().iter().map(|e| u64::from(e.quantity())).sum();
        let price: i64 = cart
            .entries()
            .iter()
            .map(|e| e.record.price.amount * i64::from(e.quantity()))
            .sum();
        assert_eq!(cart.total_count(), count);
        assert_eq!(cart.total_price().amount, price);

        // Unique ids, quantities at least one, every line from the catalog.
        let mut ids: Vec<_> = cart.entries().iter().map(|e| e.record.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), cart.len());
        assert!(cart.entries().iter().all(|e| e.quantity() >= 1));
        assert!(cart.entries().iter().all(|e| catalog.get(e.record.id) == Some(&e.record)));
    }

    // 8 ×2 (the -1 was rejected) and 5 ×4; record 2 was decremented away.
    assert_eq!(store.cart().total_count(), 6);
    assert_eq!(store.cart().total_price().amount, 2 * 3500 + 4 * 2100);
    assert!(store.cart().get(RecordId::new(2)).is_none());
}

#[test]
fn builtin_config_drives_a_session() {
    let config = StoreConfig::builtin().unwrap();
    let store = Storefront::new(Catalog::vinyl_vault())
        .reduce(Action::SetQuery("zzz".to_string()))
        .reduce(Action::Navigate(Page::About));

    assert!(store.visible().is_empty());
    assert_eq!(store.page().label(&config.nav), "О магазине");
    assert_eq!(
        config.filters.no_results,
        "Ничего не найдено. Попробуйте изменить фильтры."
    );
}
