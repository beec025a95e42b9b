//! Cart and checkout driven the way a storefront session drives them.
use std::time::Duration;

use pantry_commerce::prelude::*;

fn product(name: &str, price: f64) -> Product {
    Product::new(
        ProductId::from_name(name),
        name,
        Money::from_decimal(price, Currency::USD),
        format!("/images/{}.jpg", ProductId::from_name(name)),
    )
}

fn shipping() -> ShippingInfo {
    ShippingInfo {
        full_name: "Jose Rizal".to_string(),
        email: "jose@example.com".to_string(),
        phone: "09181234567".to_string(),
        address: "1 Calamba St".to_string(),
        city: "Calamba".to_string(),
        province: "Laguna".to_string(),
        zip_code: "4027".to_string(),
    }
}

#[test]
fn test_end_to_end_cart() {
    let store = CartStore::default();
    let corned_beef = product("Premium Corned Beef 380g", 89.99);
    let chips = product("Banana Chips 250g", 45.00);

    store.add_to_cart(&corned_beef);
    store.add_to_cart(&corned_beef);
    store.add_to_cart(&chips);

    let cart = store.snapshot();
    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.items[0].id.as_str(), "premium-corned-beef-380g");
    assert_eq!(cart.items[0].quantity, 2);
    assert_eq!(store.get_cart_count(), 3);

    let totals = store.aggregate().unwrap();
    assert_eq!(totals.subtotal.display(), "$224.98");
    assert_eq!(totals.total.display(), "$224.98");
}

#[test]
fn test_aggregate_with_flat_fee() {
    let store = CartStore::new(ShippingPolicy::standard(Currency::USD));
    let ten = product("Ten", 10.00);
    let five = product("Five", 5.00);

    store.add_to_cart(&ten);
    store.add_to_cart(&ten);
    for _ in 0..3 {
        store.add_to_cart(&five);
    }

    let totals = store.aggregate().unwrap();
    assert_eq!(totals.subtotal.amount_cents, 3500);
    assert_eq!(totals.shipping.amount_cents, 1000);
    assert_eq!(totals.total.amount_cents, 4500);
}

#[tokio::test(start_paused = true)]
async fn test_checkout_notifies_and_clears() {
    let store = CartStore::default();
    let mut badge = store.subscribe();
    store.add_to_cart(&product("Ube Halaya Jam 340g", 8.50));
    assert!(badge.changed().await);
    assert_eq!(badge.aggregate().unwrap().item_count, 1);

    let form = CheckoutForm::new(shipping(), PaymentMethod::PayMaya);
    let checkout = SimulatedCheckout::new(Duration::from_secs(2));
    let confirmation = place_order(&store, &form, &checkout).await.unwrap();

    assert!(confirmation.order_number.as_str().starts_with("PN"));
    assert_eq!(confirmation.total.display(), "$18.50");
    assert_eq!(confirmation.payment_method, PaymentMethod::PayMaya);

    assert!(badge.changed().await);
    assert_eq!(badge.aggregate().unwrap().item_count, 0);
}

#[tokio::test(start_paused = true)]
async fn test_checkout_keeps_items_added_while_processing() {
    let store = CartStore::default();
    store.add_to_cart(&product("Ube Halaya Jam 340g", 8.50));

    let other_tab = store.clone();
    let late_add = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        other_tab.add_to_cart(&product("Banana Chips 250g", 4.50));
    });

    let form = CheckoutForm::new(shipping(), PaymentMethod::CashOnDelivery);
    let checkout = SimulatedCheckout::new(Duration::from_secs(2));
    let confirmation = place_order(&store, &form, &checkout).await.unwrap();
    late_add.await.unwrap();

    assert_eq!(confirmation.item_count, 1);
    assert_eq!(store.get_cart_count(), 1);
    let remaining = store.snapshot();
    assert_eq!(remaining.items[0].id.as_str(), "banana-chips-250g");
}
