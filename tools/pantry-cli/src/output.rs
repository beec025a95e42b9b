//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pantry_commerce::catalog::{Badge, Product};
use pantry_commerce::cart::CartAggregate;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print products as a table, or as JSON in JSON mode.
    pub fn products(&self, products: &[Product]) {
        if self.json {
            self.json(&products);
            return;
        }
        if products.is_empty() {
            self.info("No products found");
            return;
        }
        for product in products {
            let name = match &product.badge {
                Some(badge) => format!("{} {}", product.name, badge_label(badge)),
                None => product.name.clone(),
            };
            self.table_row(
                &[&name, &price_label(product), &stock_label(product)],
                &[48, 22, 12],
            );
            self.debug(&format!("id: {}", product.id));
        }
    }

    /// Print cart totals.
    pub fn totals(&self, totals: &CartAggregate) {
        if self.json {
            self.json(totals);
            return;
        }
        self.kv("Items", &totals.item_count.to_string());
        self.kv("Subtotal", &totals.subtotal.display());
        let shipping = if totals.shipping.is_zero() {
            style("FREE").green().to_string()
        } else {
            totals.shipping.display()
        };
        self.kv("Shipping", &shipping);
        self.kv("Total", &style(totals.total.display()).bold().to_string());
        if !totals.qualifies_for_free_shipping {
            self.info(&format!(
                "Add {} more for free shipping",
                totals.remaining_for_free_shipping.display()
            ));
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Current price, with the struck-through original when on sale.
pub fn price_label(product: &Product) -> String {
    match &product.original_price {
        Some(original) if product.is_on_sale() => format!(
            "{} {}",
            style(product.price.display()).green(),
            style(original.display()).dim().strikethrough()
        ),
        _ => product.price.display(),
    }
}

fn stock_label(product: &Product) -> String {
    if product.is_available() {
        style("in stock").dim().to_string()
    } else {
        style("sold out").red().to_string()
    }
}

/// Coloured product badge.
pub fn badge_label(badge: &Badge) -> String {
    let text = format!("[{}]", badge.as_str());
    match badge {
        Badge::Sale => style(text).red().to_string(),
        Badge::New => style(text).cyan().to_string(),
        _ => style(text).yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_commerce::{Currency, Money};

    #[test]
    fn test_price_label_plain() {
        console::set_colors_enabled(false);
        let product = Product::new("p", "Vinegar", Money::new(3500, Currency::USD), "");
        assert_eq!(price_label(&product), "$35.00");
    }

    #[test]
    fn test_price_label_on_sale() {
        console::set_colors_enabled(false);
        let product = Product::new("p", "Corned Beef", Money::new(8999, Currency::USD), "")
            .with_original_price(Money::new(12000, Currency::USD));
        assert_eq!(price_label(&product), "$89.99 $120.00");
    }
}
