use std::{cell::Cell, rc::Rc};

use floem_reactive::create_effect;
use nautilus_store::{
    catalog::{self, PRODUCTS},
    CartStore, CategorySelector, Price,
};
use pretty_assertions::assert_eq;

fn product(id: u32) -> &'static nautilus_store::Product {
    catalog::product(id).expect("product in catalog")
}

#[test]
fn adding_twice_merges_into_one_line() {
    let cart = CartStore::new();
    cart.add(product(1));
    cart.add(product(1));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.quantity_of(1), Some(2));
    assert_eq!(cart.total(), Price::from_dollars(50));
}

#[test]
fn quantity_equals_number_of_adds() {
    let cart = CartStore::new();
    let counts = [(4, 3u32), (12, 1), (7, 5)];
    for (id, times) in counts {
        for _ in 0..times {
            cart.add(product(id));
        }
    }

    for (id, times) in counts {
        assert_eq!(cart.quantity_of(id), Some(times));
    }
    let expected: Price = counts
        .iter()
        .map(|&(id, times)| product(id).price.times(times))
        .sum();
    assert_eq!(cart.total(), expected);
    assert_eq!(cart.item_count(), 9);
    assert_eq!(
        cart.entries().iter().map(|entry| entry.id()).collect::<Vec<_>>(),
        [4, 12, 7]
    );
}

#[test]
fn remove_drops_the_whole_line() {
    let cart = CartStore::new();
    for _ in 0..3 {
        cart.add(product(2));
    }
    cart.add(product(5));

    cart.remove(2);
    assert_eq!(cart.quantity_of(2), None);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total(), Price::from_dollars(20));

    cart.add(product(2));
    assert_eq!(cart.quantity_of(2), Some(1));
    assert_eq!(
        cart.entries().iter().map(|entry| entry.id()).collect::<Vec<_>>(),
        [5, 2]
    );
}

#[test]
fn removing_absent_id_is_a_no_op() {
    let cart = CartStore::new();
    cart.add(product(8));
    cart.remove(99);
    assert_eq!(cart.len(), 1);
    assert!(!cart.is_empty());
    cart.remove(8);
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Price::ZERO);
}

#[test]
fn total_is_reactive() {
    let cart = CartStore::new();
    let runs = Rc::new(Cell::new(0));
    let last_total = Rc::new(Cell::new(Price::ZERO));

    create_effect({
        let runs = runs.clone();
        let last_total = last_total.clone();
        move |_| {
            runs.set(runs.get() + 1);
            last_total.set(cart.total());
        }
    });

    cart.add(product(10));
    cart.add(product(11));
    assert_eq!(runs.get(), 3);
    assert_eq!(last_total.get(), Price::from_dollars(13));
}

#[test]
fn category_filter_matches_catalog() {
    let selector = CategorySelector::default();
    selector.select("boosters");
    let ids: Vec<u32> = selector.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, [10, 11, 12]);

    selector.select("");
    assert!(selector.products().is_empty());

    let listed: usize = ["ranks", "kits", "cosmetics", "boosters"]
        .into_iter()
        .map(|key| {
            selector.select(key);
            selector.products().len()
        })
        .sum();
    assert_eq!(listed, PRODUCTS.len());
}
