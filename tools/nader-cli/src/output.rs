//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use nader_commerce::cart::Cart;
use nader_commerce::catalog::Product;

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

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "failed to render JSON output"),
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

    /// Print products as a table.
    pub fn products(&self, products: &[&Product]) {
        if self.json {
            return;
        }
        const WIDTHS: [usize; 4] = [24, 22, 14, 9];
        self.table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &WIDTHS);
        for p in products {
            let price = p.price.display();
            let name = if p.in_stock {
                p.name.clone()
            } else {
                format!("{} (out of stock)", p.name)
            };
            self.table_row(&[p.id.as_str(), &name, p.category.as_str(), &price], &WIDTHS);
        }
    }

    /// Print the cart contents and totals.
    pub fn cart(&self, cart: &Cart) {
        if self.json {
            return;
        }
        if cart.is_empty() {
            self.info("Your cart is empty");
            return;
        }

        const WIDTHS: [usize; 4] = [24, 6, 9, 10];
        self.table_row(&["PRODUCT", "QTY", "PRICE", "LINE"], &WIDTHS);
        for item in cart.items() {
            let qty = item.quantity.to_string();
            let price = item.product.price.display();
            let line = item.line_total().display();
            self.table_row(&[&item.product.name, &qty, &price, &line], &WIDTHS);
        }
        println!();
        self.kv("Items", &cart.item_count().to_string());
        self.kv("Total", &style(cart.total().display()).bold().to_string());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored status badge.
pub fn status_badge(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "completed" | "processing" | "enabled" | "configured" => style(status).green().to_string(),
        "pending" => style(status).yellow().to_string(),
        "failed" | "declined" => style(status).red().to_string(),
        "disabled" | "not configured" => style(status).dim().to_string(),
        _ => status.to_string(),
    }
}
