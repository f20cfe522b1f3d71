//! # mm_types
//!
//! Values shared between the trading engine and the notification layer

mod settings;

use serde::Deserialize;
use serde::Serialize;

pub use settings::Settings;

/// Order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }

    #[inline]
    pub fn is_buy(self) -> bool {
        matches!(self, OrderSide::Buy)
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order execution type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

impl OrderType {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order as reported by the trading engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub side: OrderSide,
    pub symbol: String,
    pub size: f64,
    /// Absent for market orders
    pub price: Option<f64>,
    pub order_type: OrderType,
}

impl Order {
    pub fn limit(id: impl Into<String>, side: OrderSide, symbol: impl Into<String>, size: f64, price: f64) -> Self {
        Self { id: id.into(), side, symbol: symbol.into(), size, price: Some(price), order_type: OrderType::Limit }
    }

    pub fn market(id: impl Into<String>, side: OrderSide, symbol: impl Into<String>, size: f64) -> Self {
        Self { id: id.into(), side, symbol: symbol.into(), size, price: None, order_type: OrderType::Market }
    }

    /// Price used for display, zero when the order carries none
    #[inline]
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Open position snapshot
///
/// `size` is signed: positive is long, negative is short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub size: f64,
    pub entry_price: f64,
    pub unrealized_pnl: f64,
}

impl Position {
    pub fn new(symbol: impl Into<String>, size: f64, entry_price: f64, unrealized_pnl: f64) -> Self {
        Self { symbol: symbol.into(), size, entry_price, unrealized_pnl }
    }
}
