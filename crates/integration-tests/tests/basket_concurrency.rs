//! Integration tests for many callers sharing one basket store.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use basket_core::{BasketStore, Item, Price, Product, ProductCode, SessionId};
use rust_decimal_macros::dec;

const THREADS: usize = 8;
const ROUNDS: usize = 250;

fn product(code: i32) -> Product {
    Product::new(
        ProductCode::new(code),
        format!("product-{code}"),
        Price::new(dec!(0.99)),
    )
}

#[test]
fn test_concurrent_adds_to_one_line_are_not_lost() {
    let store = BasketStore::new();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = store.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ROUNDS {
                    store.add_item(SessionId::new(1), product(11), 1).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let expected = i32::try_from(THREADS * ROUNDS).unwrap();
    assert_eq!(
        store.get_basket(SessionId::new(1)).unwrap(),
        vec![Item::new(ProductCode::new(11), expected)]
    );
}

#[test]
fn test_concurrent_add_and_remove_balance_out() {
    let store = BasketStore::new();
    store.add_item(SessionId::new(1), product(99), 1).unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    // Half the threads add 2, half remove 1 after adding 1, so every thread
    // nets +1 per round on product 11.
    let handles: Vec<_> = (0..THREADS)
        .map(|n| {
            let store = store.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ROUNDS {
                    if n % 2 == 0 {
                        store.add_item(SessionId::new(1), product(11), 1).unwrap();
                    } else {
                        store.add_item(SessionId::new(1), product(11), 2).unwrap();
                        store
                            .remove_item(SessionId::new(1), ProductCode::new(11), 1)
                            .unwrap();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let expected = i32::try_from(THREADS * ROUNDS).unwrap();
    assert_eq!(
        store.get_basket(SessionId::new(1)).unwrap(),
        vec![
            Item::new(ProductCode::new(99), 1),
            Item::new(ProductCode::new(11), expected)
        ]
    );
}

#[test]
fn test_sessions_are_independent_under_contention() {
    let store = BasketStore::new();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|n| {
            let store = store.clone();
            let barrier = Arc::clone(&barrier);
            let session = SessionId::new(i64::try_from(n).unwrap());
            thread::spawn(move || {
                barrier.wait();
                for round in 0..ROUNDS {
                    let code = i32::try_from(round % 3).unwrap();
                    store.add_item(session, product(code), 1).unwrap();
                }
                // Empty every other session completely
                if n % 2 == 0 {
                    for code in 0..3 {
                        store
                            .remove_item(session, ProductCode::new(code), i32::MAX)
                            .unwrap();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.len(), THREADS / 2);
    for (session, items) in snapshot.iter() {
        assert_eq!(session.get() % 2, 1, "emptied session {session} still stored");
        let total: i32 = items.iter().map(|item| item.quantity).sum();
        assert_eq!(total, i32::try_from(ROUNDS).unwrap());
        // First adds were codes 0, 1, 2 in that order
        let codes: Vec<_> = items.iter().map(|item| item.product_code.get()).collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }
}

#[test]
fn test_readers_never_see_torn_state() {
    let store = BasketStore::new();
    let done = Arc::new(AtomicBool::new(false));

    let writer = {
        let store = store.clone();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            for _ in 0..ROUNDS {
                for session in 0..4 {
                    store.add_item(SessionId::new(session), product(1), 3).unwrap();
                    store
                        .remove_item(SessionId::new(session), ProductCode::new(1), 3)
                        .unwrap();
                }
            }
            done.store(true, Ordering::Release);
        })
    };

    let readers: Vec<_> = (0..THREADS / 2)
        .map(|_| {
            let store = store.clone();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Acquire) {
                    for (_, items) in store.snapshot().unwrap().iter() {
                        assert!(!items.is_empty(), "empty basket left in store");
                        assert!(items.iter().all(|item| item.quantity == 3));
                    }
                    if let Some(checkout) = store.calculate_checkout(SessionId::new(0)).unwrap() {
                        assert_eq!(checkout.final_price_including_discount, Price::new(dec!(1.98)));
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert!(store.snapshot().unwrap().is_empty());
}
