//! HTML message templates for Telegram notifications
//!
//! Every function here is pure: the same input always renders the same text.

use mm_types::Order;
use mm_types::OrderSide;
use mm_types::Position;
use mm_types::Settings;
use teloxide::utils::html::escape as escape_html;

pub const START_MESSAGE: &str = "🤖 Hyperliquid Market Making Bot\n\n\
    Available commands:\n\
    /status - Get bot status\n\
    /position - Get current position\n\
    /orders - Get active orders\n\
    /help - Show this help message";

pub const HELP_MESSAGE: &str = "📚 Bot Commands:\n\n\
    /status - Get current bot status and configuration\n\
    /position - View current position details\n\
    /orders - List all active orders\n\
    /help - Show this help message";

pub const POSITION_CLOSED_MESSAGE: &str = "📉 <b>Position Closed</b>\n\nNo open position.";

pub const NO_ACTIVE_ORDERS_MESSAGE: &str = "📋 <b>Active Orders</b>\n\nNo active orders.";

#[inline]
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

#[inline]
pub fn format_size(size: f64) -> String {
    format!("{size:.4}")
}

#[inline]
pub fn side_marker(side: OrderSide) -> &'static str {
    if side.is_buy() { "🟢" } else { "🔴" }
}

fn side_label(side: OrderSide) -> String {
    side.as_str().to_uppercase()
}

/// Titled template shared by error, alert and info messages
pub fn notification(title: &str, message: &str, marker: &str) -> String {
    format!("{marker} <b>{}</b>\n\n{}", escape_html(title), escape_html(message))
}

pub fn error(message: &str) -> String {
    notification("Error", message, "⚠️")
}

pub fn alert(message: &str) -> String {
    notification("Alert", message, "🚨")
}

pub fn info(message: &str) -> String {
    notification("Info", message, "ℹ️")
}

pub fn status(settings: &Settings, position: Option<&Position>, active_orders: usize, running: bool) -> String {
    let position_line = match position {
        Some(position) => format!("{} @ {}", format_size(position.size), format_price(position.entry_price)),
        None => "None".to_string(),
    };
    let state = if running { "🟢 Running" } else { "🔴 Stopped" };

    format!(
        "📊 <b>Bot Status</b>\n\n\
         <b>Configuration:</b>\n\
         Symbol: {}\n\
         Spread: {}%\n\
         Order Size: {}\n\
         Max Position: {}\n\
         Update Interval: {}ms\n\n\
         <b>Current State:</b>\n\
         Position: {position_line}\n\
         Active Orders: {active_orders}\n\
         Status: {state}",
        escape_html(&settings.symbol),
        settings.spread_percentage,
        format_size(settings.order_size),
        format_size(settings.max_position_size),
        settings.update_interval_ms,
    )
}

pub fn position_update(position: Option<&Position>) -> String {
    match position {
        Some(position) => format!(
            "📈 <b>Position Update</b>\n\n\
             Symbol: {}\n\
             Size: {}\n\
             Entry Price: {}\n\
             Unrealized PnL: {}",
            escape_html(&position.symbol),
            format_size(position.size),
            format_price(position.entry_price),
            format_price(position.unrealized_pnl),
        ),
        None => POSITION_CLOSED_MESSAGE.to_string(),
    }
}

pub fn order_placed(order: &Order) -> String {
    format!(
        "{} <b>Order Placed</b>\n\n\
         Side: {}\n\
         Symbol: {}\n\
         Size: {}\n\
         Price: {}\n\
         Type: {}",
        side_marker(order.side),
        side_label(order.side),
        escape_html(&order.symbol),
        format_size(order.size),
        format_price(order.price_or_zero()),
        order.order_type,
    )
}

pub fn order_filled(order: &Order, fill_price: f64) -> String {
    format!(
        "✅ <b>Order Filled</b>\n\n\
         {} {} {} {}\n\
         Fill Price: {}",
        side_marker(order.side),
        side_label(order.side),
        format_size(order.size),
        escape_html(&order.symbol),
        format_price(fill_price),
    )
}

pub fn order_cancelled(order_id: &str) -> String {
    format!("❌ <b>Order Cancelled</b>\n\nOrder ID: {}", escape_html(order_id))
}

/// Numbered list in input order
pub fn active_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return NO_ACTIVE_ORDERS_MESSAGE.to_string();
    }

    let lines: String = orders
        .iter()
        .enumerate()
        .map(|(index, order)| {
            format!(
                "{}. {} {} {} @ {}\n",
                index + 1,
                side_marker(order.side),
                side_label(order.side),
                format_size(order.size),
                format_price(order.price_or_zero()),
            )
        })
        .collect();

    format!("📋 <b>Active Orders</b> ({})\n\n{lines}", orders.len())
}
