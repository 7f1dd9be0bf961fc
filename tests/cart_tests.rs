//! End-to-end cart flows against the public API.

use cartwheel::cart::{CartStore, OrderSummary, SharedCart};
use cartwheel::testkit::{product, product_id};
use rust_decimal_macros::dec;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn full_shopping_flow_derives_consistent_totals() {
    init_tracing();
    let mut cart = CartStore::new();
    let shoe = product("shoe", dec!(59.90));
    let hat = product("hat", dec!(15.00));

    cart.add_item(&shoe, 1);
    cart.add_item(&hat, 2);
    cart.add_item(&shoe, 1);

    let state = cart.state();
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.item_count(), 4);
    assert_eq!(state.subtotal(), dec!(149.80));

    cart.update_quantity(&product_id("hat"), 1);
    let state = cart.state();
    assert_eq!(state.item_count(), 3);
    assert_eq!(state.subtotal(), dec!(134.80));
}

#[test]
fn add_update_remove_sequence_ends_with_empty_cart() {
    let mut cart = CartStore::new();
    let item = product("x", dec!(9.99));

    cart.add_item(&item, 1);
    cart.add_item(&item, 1);
    cart.update_quantity(&product_id("x"), 5);
    cart.remove_item(&product_id("x"));

    let state = cart.state();
    assert!(state.items().is_empty());
    assert_eq!(state.item_count(), 0);
    assert_eq!(state.subtotal(), dec!(0));
}

#[test]
fn merge_is_equivalent_to_single_bulk_add() {
    let item = product("x", dec!(9.99));

    let mut repeated = CartStore::new();
    for _ in 0..7 {
        repeated.add_item(&item, 1);
    }

    let mut bulk = CartStore::new();
    bulk.add_item(&item, 7);

    assert_eq!(repeated.state().item_count(), bulk.state().item_count());
    assert_eq!(repeated.state().subtotal(), bulk.state().subtotal());
}

#[test]
fn order_summary_applies_tax_and_free_shipping() {
    let mut cart = CartStore::new();
    cart.add_item(&product("shoe", dec!(59.90)), 2);

    let summary = OrderSummary::from_state(&cart.state(), dec!(0.08));

    assert_eq!(summary.subtotal(), dec!(119.80));
    assert_eq!(summary.shipping(), dec!(0));
    assert_eq!(summary.tax(), dec!(9.5840));
    assert_eq!(summary.total(), dec!(129.3840));
}

#[test]
fn shared_cart_handles_see_the_same_lines() {
    let cart = SharedCart::new();
    let view_handle = cart.clone();
    let header_handle = cart.clone();

    cart.add_item(&product("shoe", dec!(10)), 1);
    view_handle.add_item(&product("hat", dec!(5)), 2);
    header_handle.remove_item(&product_id("shoe"));

    let state = cart.state();
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.item_count(), 2);
    assert_eq!(state.subtotal(), dec!(10));
}

#[test]
fn shared_cart_mutations_from_threads_serialize() {
    let cart = SharedCart::new();
    let item = product("x", dec!(1));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cart = cart.clone();
            let item = item.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    cart.add_item(&item, 1);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let state = cart.state();
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.item_count(), 800);
    assert_eq!(state.subtotal(), dec!(800));
}
