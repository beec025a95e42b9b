//! Interactive shopping session: browse, search, manage the cart, check out.

use anyhow::{bail, Result};
use chrono::{DateTime, Local};
use console::style;
use dialoguer::{Confirm, Input, Select};
use pantry_catalog::Catalog;
use pantry_commerce::cart::{CartStore, CartSubscription};
use pantry_commerce::catalog::{or_empty, Product, ProductSource, ALL_PRODUCTS_SLUG};
use pantry_commerce::checkout::{
    place_order, CheckoutError, CheckoutForm, PaymentMethod, ShippingInfo, SimulatedCheckout,
};
use pantry_commerce::routes::Route;
use pantry_commerce::search::SuggestionPipeline;

use super::ShopArgs;
use crate::context::Context;
use crate::output::price_label;

const MENU: [&str; 7] = [
    "Featured products",
    "Browse a category",
    "Search",
    "View cart",
    "Change quantity",
    "Checkout",
    "Quit",
];

/// Run the interactive session.
pub async fn run(_args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop session is interactive and does not support --json");
    }

    let catalog = ctx.catalog()?;
    let suggestions = SuggestionPipeline::new(catalog.clone(), ctx.config.suggestion_config()?);
    let store = ctx.cart_store()?;
    let processor = ctx.config.checkout_processor();

    tokio::spawn(watch_cart(store.subscribe()));

    ctx.output.header("Welcome to PinoyPantry");
    loop {
        let count = store.get_cart_count();
        let choice = Select::new()
            .with_prompt(format!("What next? (cart: {} items)", count))
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let products = or_empty(catalog.list_featured().await, "list_featured");
                pick_and_add(&products, &store, ctx)?;
            }
            1 => browse_category(&catalog, &store, ctx).await?,
            2 => search(&catalog, &suggestions, &store, ctx).await?,
            3 => show_cart(&store, ctx)?,
            4 => change_quantity(&store, ctx)?,
            5 => checkout(&store, &processor, ctx).await?,
            _ => break,
        }
    }

    if !store.is_empty() {
        ctx.output.warn(&format!(
            "Leaving {} items in the cart",
            store.get_cart_count()
        ));
    }
    Ok(())
}

/// Log cart changes until the session's store goes away.
async fn watch_cart(mut subscription: CartSubscription) {
    while subscription.changed().await {
        if let Ok(totals) = subscription.aggregate() {
            tracing::debug!(
                items = totals.item_count,
                subtotal = %totals.subtotal,
                "cart updated"
            );
        }
    }
}

async fn browse_category(catalog: &Catalog, store: &CartStore, ctx: &Context) -> Result<()> {
    let categories = or_empty(catalog.list_categories().await, "list_categories");
    let mut labels: Vec<String> = vec!["All products".to_string()];
    labels.extend(
        categories
            .iter()
            .map(|c| format!("{} {} ({})", c.icon, c.title, c.item_count)),
    );

    let choice = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;
    let slug = match choice {
        0 => ALL_PRODUCTS_SLUG,
        n => categories[n - 1].slug.as_str(),
    };

    ctx.output.debug(&Route::Category(slug.to_string()).path());
    let products = or_empty(catalog.list_by_category(slug).await, "list_by_category");
    pick_and_add(&products, store, ctx)
}

async fn search(
    catalog: &Catalog,
    suggestions: &SuggestionPipeline<Catalog>,
    store: &CartStore,
    ctx: &Context,
) -> Result<()> {
    let text: String = Input::new()
        .with_prompt("Search")
        .allow_empty(true)
        .interact_text()?;

    suggestions.input(&text);
    let state = suggestions.settled().await;

    let route = if state.is_open() {
        let mut labels: Vec<String> = state
            .suggestions
            .iter()
            .map(|p| format!("{}  {}", p.name, price_label(p)))
            .collect();
        labels.push(format!("See all {} results", state.total_matches));

        let choice = Select::new()
            .with_prompt("Suggestions")
            .items(&labels)
            .default(0)
            .interact()?;
        match state.suggestions.get(choice) {
            Some(product) => suggestions.select(product),
            None => match suggestions.submit() {
                Some(route) => route,
                None => return Ok(()),
            },
        }
    } else {
        match suggestions.submit() {
            Some(route) => route,
            None => {
                ctx.output.info("Nothing to search for");
                return Ok(());
            }
        }
    };

    let Route::Search(query) = route else {
        return Ok(());
    };
    ctx.output.debug(&Route::Search(query.clone()).path());
    let results = or_empty(catalog.search(&query).await, "search");
    ctx.output.header(&format!("{} results for \"{}\"", results.len(), query));
    pick_and_add(&results, store, ctx)
}

fn pick_and_add(products: &[Product], store: &CartStore, ctx: &Context) -> Result<()> {
    if products.is_empty() {
        ctx.output.info("No products found");
        return Ok(());
    }

    let mut labels: Vec<String> = products
        .iter()
        .map(|p| {
            let stock = if p.is_available() { "" } else { " (sold out)" };
            format!("{}  {}{}", p.name, price_label(p), stock)
        })
        .collect();
    labels.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Add to cart")
        .items(&labels)
        .default(0)
        .interact()?;

    let Some(product) = products.get(choice) else {
        return Ok(());
    };
    if !product.is_available() {
        ctx.output.warn(&format!("{} is sold out", product.name));
        return Ok(());
    }

    store.add_to_cart(product);
    let quantity = store.line_item(&product.id).map(|item| item.quantity).unwrap_or(0);
    ctx.output
        .success(&format!("Added {} (x{} in cart)", product.name, quantity));
    Ok(())
}

fn show_cart(store: &CartStore, ctx: &Context) -> Result<()> {
    let cart = store.snapshot();
    ctx.output.header("Your Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    for item in &cart.items {
        let line_total = item
            .line_total()
            .map(|total| total.display())
            .unwrap_or_else(|| "-".to_string());
        let quantity = format!("x{}", item.quantity);
        ctx.output.table_row(
            &[&item.name, &item.price.display(), &quantity, &line_total],
            &[40, 12, 6, 12],
        );
    }
    println!();
    ctx.output.totals(&store.aggregate()?);
    Ok(())
}

fn change_quantity(store: &CartStore, ctx: &Context) -> Result<()> {
    let cart = store.snapshot();
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let labels: Vec<String> = cart
        .items
        .iter()
        .map(|item| format!("{} (x{})", item.name, item.quantity))
        .collect();
    let index = Select::new()
        .with_prompt("Which item?")
        .items(&labels)
        .default(0)
        .interact()?;
    let item = &cart.items[index];

    let action = Select::new()
        .with_prompt(&item.name)
        .items(&["+1", "-1", "Remove", "Back"])
        .default(0)
        .interact()?;
    match action {
        0 => store.update_quantity(&item.id, 1),
        1 => store.update_quantity(&item.id, -1),
        2 => {
            store.remove_item(&item.id);
            ctx.output.success(&format!("Removed {}", item.name));
        }
        _ => {}
    }
    Ok(())
}

async fn checkout(
    store: &CartStore,
    processor: &SimulatedCheckout,
    ctx: &Context,
) -> Result<()> {
    if store.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    show_cart(store, ctx)?;
    let mut form = CheckoutForm::default();

    loop {
        form.shipping = prompt_shipping(&form.shipping)?;
        form.payment_method = Some(prompt_payment(form.payment_method)?);

        let spinner = ctx.output.spinner("Processing your order...");
        let result = place_order(store, &form, processor).await;
        spinner.finish_and_clear();

        match result {
            Ok(confirmation) => {
                ctx.output.success("Order placed! Thank you for shopping with us");
                ctx.output.kv("Order number", confirmation.order_number.as_str());
                ctx.output.kv("Total", &confirmation.total.display());
                ctx.output.kv("Payment", confirmation.payment_method.display_name());
                ctx.output.kv("Ship to", &form.shipping.one_line());
                if let Some(placed) = DateTime::from_timestamp(confirmation.placed_at, 0) {
                    ctx.output.kv(
                        "Placed",
                        &placed.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
                    );
                }
                ctx.output.info(&format!(
                    "A confirmation email will be sent to {}",
                    style(&confirmation.email).bold()
                ));
                return Ok(());
            }
            Err(CheckoutError::Validation(fields)) => {
                let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                ctx.output.warn(&format!(
                    "Please fill in all required fields: {}",
                    labels.join(", ")
                ));
                let retry = Confirm::new()
                    .with_prompt("Edit your details?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(());
                }
            }
            Err(e) => {
                ctx.output.error(&e.to_string());
                return Ok(());
            }
        }
    }
}

fn prompt_shipping(current: &ShippingInfo) -> Result<ShippingInfo> {
    Ok(ShippingInfo {
        full_name: prompt_field("Full name", &current.full_name)?,
        email: prompt_field("Email", &current.email)?,
        phone: prompt_field("Phone", &current.phone)?,
        address: prompt_field("Street address", &current.address)?,
        city: prompt_field("City", &current.city)?,
        province: prompt_field("Province", &current.province)?,
        zip_code: prompt_field("ZIP code", &current.zip_code)?,
    })
}

fn prompt_field(prompt: &str, current: &str) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if !current.is_empty() {
        input = input.with_initial_text(current);
    }
    Ok(input.interact_text()?)
}

fn prompt_payment(current: Option<PaymentMethod>) -> Result<PaymentMethod> {
    let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.display_name()).collect();
    let default = current
        .and_then(|method| PaymentMethod::ALL.iter().position(|m| *m == method))
        .unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Payment method")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(PaymentMethod::ALL[choice])
}
