//! Equity and index quote records
//!
//! A perturbation step never invents change figures independently of the
//! price: `change` is the exact delta between the rounded levels and the
//! percent is derived from it.

use crate::errors::TypesError;
use crate::numeric::{jittered_level, percent_change};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Equity quote shown in the stock panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub volume: String,
    pub market_cap: String,
    pub sector: String,
}

impl Quote {
    /// Apply one jitter draw and recompute the change figures.
    ///
    /// Descriptive fields are carried over untouched.
    pub fn perturbed(&self, jitter: Decimal) -> Quote {
        let price = jittered_level(self.price, jitter);
        Quote {
            price,
            change: price - self.price,
            change_percent: percent_change(self.price, price),
            ..self.clone()
        }
    }

    pub fn is_up(&self) -> bool {
        self.change >= Decimal::ZERO
    }
}

/// Market index level. Carries only a percent change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    pub name: String,
    pub symbol: String,
    pub value: Decimal,
    pub change_percent: Decimal,
}

impl IndexQuote {
    pub fn perturbed(&self, jitter: Decimal) -> IndexQuote {
        let value = jittered_level(self.value, jitter);
        IndexQuote {
            value,
            change_percent: percent_change(self.value, value),
            ..self.clone()
        }
    }

    pub fn is_up(&self) -> bool {
        self.change_percent >= Decimal::ZERO
    }
}

/// Which list the stock panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockView {
    #[default]
    Stocks,
    Indices,
}

impl fmt::Display for StockView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockView::Stocks => f.write_str("stocks"),
            StockView::Indices => f.write_str("indices"),
        }
    }
}

impl FromStr for StockView {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stocks" => Ok(StockView::Stocks),
            "indices" => Ok(StockView::Indices),
            _ => Err(TypesError::UnknownStockView(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::MIN_PRICE;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn apple() -> Quote {
        Quote {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            price: dec!(175.43),
            change: dec!(2.15),
            change_percent: dec!(1.24),
            volume: "52.3M".to_string(),
            market_cap: "2.8T".to_string(),
            sector: "Technology".to_string(),
        }
    }

    fn spx() -> IndexQuote {
        IndexQuote {
            name: "S&P 500".to_string(),
            symbol: "SPX".to_string(),
            value: dec!(4789.85),
            change_percent: dec!(0.45),
        }
    }

    #[test]
    fn test_documented_example() {
        let next = apple().perturbed(dec!(2.15));
        assert_eq!(next.price, dec!(177.58));
        assert_eq!(next.change, dec!(2.15));
        assert_eq!(next.change_percent, dec!(1.23));
    }

    #[test]
    fn test_descriptive_fields_unchanged() {
        let before = apple();
        let next = before.perturbed(dec!(-0.731));
        assert_eq!(next.symbol, before.symbol);
        assert_eq!(next.name, before.name);
        assert_eq!(next.volume, before.volume);
        assert_eq!(next.market_cap, before.market_cap);
        assert_eq!(next.sector, before.sector);
    }

    #[test]
    fn test_price_floored() {
        let mut q = apple();
        q.price = dec!(0.40);
        let next = q.perturbed(dec!(-0.99));
        assert_eq!(next.price, MIN_PRICE);
        assert_eq!(next.change, dec!(-0.39));
        assert_eq!(next.change_percent, dec!(-97.50));
    }

    #[test]
    fn test_midpoint_jitter_keeps_change_consistent() {
        let mut q = apple();
        q.price = dec!(100.00);
        let next = q.perturbed(dec!(-0.005));
        assert_eq!(next.change, next.price - q.price);
    }

    #[test]
    fn test_index_perturbed() {
        let next = spx().perturbed(dec!(0.2));
        assert_eq!(next.value, dec!(4790.05));
        assert_eq!(next.change_percent, dec!(0.00));
        assert_eq!(next.symbol, "SPX");
    }

    #[test]
    fn test_index_has_no_absolute_change_field() {
        let json = serde_json::to_value(spx().perturbed(dec!(-0.1))).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("change"));
        assert!(obj.contains_key("changePercent"));
        assert!(obj.contains_key("value"));
    }

    #[test]
    fn test_quote_camel_case_serialization() {
        let json = serde_json::to_value(apple()).unwrap();
        assert_eq!(json["marketCap"], "2.8T");
        assert!(json.get("changePercent").is_some());
    }

    #[test]
    fn test_stock_view_parse() {
        assert_eq!("INDICES".parse::<StockView>().unwrap(), StockView::Indices);
        assert_eq!(StockView::default(), StockView::Stocks);
        assert!("bonds".parse::<StockView>().is_err());
    }

    proptest! {
        #[test]
        fn prop_quote_invariants(cents in 1i64..100_000_000, micros in -1_000_000i64..1_000_000) {
            let mut q = apple();
            q.price = Decimal::new(cents, 2);
            let jitter = Decimal::new(micros, 6);
            let next = q.perturbed(jitter);

            prop_assert!(next.price > Decimal::ZERO);
            prop_assert_eq!(next.change, next.price - q.price);
            let exact = next.change / q.price * Decimal::ONE_HUNDRED;
            prop_assert!((next.change_percent - exact).abs() < dec!(0.01));
            prop_assert!(next.price.scale() <= 2);
        }

        #[test]
        fn prop_index_stays_positive(cents in 1i64..10_000_000, micros in -250_000i64..250_000) {
            let mut idx = spx();
            idx.value = Decimal::new(cents, 2);
            let next = idx.perturbed(Decimal::new(micros, 6));
            prop_assert!(next.value >= MIN_PRICE);
        }
    }
}
