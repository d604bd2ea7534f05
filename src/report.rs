//! Fixed-width terminal tables for clients and orders.

use crate::model::{Client, OrderSummary};
use std::fmt::Write;

pub const REPORT_WIDTH: usize = 80;
pub const CURRENCY_PREFIX: &str = "R$";

pub const NO_CLIENTS: &str = "⚠ No clients registered.";
pub const NO_ORDERS: &str = "⚠ No orders registered.";

fn banner(out: &mut String, title: &str) {
    let heavy = "=".repeat(REPORT_WIDTH);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "{:^width$}", title, width = REPORT_WIDTH);
    let _ = writeln!(out, "{}", heavy);
}

fn footer(out: &mut String, count: usize, noun: &str) {
    let _ = writeln!(out, "{}", "=".repeat(REPORT_WIDTH));
    let _ = writeln!(out, "Total: {} {}(s)", count, noun);
    let _ = writeln!(out);
}

pub fn render_clients(clients: &[Client]) -> String {
    let mut out = String::new();
    if clients.is_empty() {
        let _ = writeln!(out, "\n{}", NO_CLIENTS);
        return out;
    }
    banner(&mut out, "CLIENT LIST");
    let _ = writeln!(out, "{:<5} {:<25} {:<30} {:<15}", "ID", "Name", "Email", "Phone");
    let _ = writeln!(out, "{}", "-".repeat(REPORT_WIDTH));
    for c in clients {
        let _ = writeln!(out, "{:<5} {:<25} {:<30} {:<15}", c.id, c.name, c.email, c.phone);
    }
    footer(&mut out, clients.len(), "client");
    out
}

pub fn render_orders(orders: &[OrderSummary]) -> String {
    let mut out = String::new();
    if orders.is_empty() {
        let _ = writeln!(out, "\n{}", NO_ORDERS);
        return out;
    }
    banner(&mut out, "ORDER LIST");
    let _ = writeln!(
        out,
        "{:<5} {:<25} {:<20} {:<12} {:<15}",
        "ID", "Client", "Product", "Amount", "Date"
    );
    let _ = writeln!(out, "{}", "-".repeat(REPORT_WIDTH));
    for o in orders {
        let _ = writeln!(
            out,
            "{:<5} {:<25} {:<20} {:<12} {:<15}",
            o.id,
            o.client_name,
            o.product,
            format_amount(o.amount),
            o.date
        );
    }
    footer(&mut out, orders.len(), "order");
    out
}

/// `1234567.891` -> `R$1,234,567.89`. The sign follows the currency prefix.
/// Non-finite amounts are printed as-is (`R$inf`, `R$NaN`).
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", CURRENCY_PREFIX, amount);
    }
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}", CURRENCY_PREFIX, sign, grouped, frac_part)
}
