//! Market simulators: random-walk jitter over quotes
//!
//! One generic simulator drives both panels: equities with a [-1, 1) draw and
//! indices with a [-0.25, 0.25) draw. Each tick draws one value per record,
//! in array order, and replaces the record with its perturbed copy. Ticks
//! compound on the rounded levels.

use rust_decimal::Decimal;
use std::time::Duration;
use tracing::debug;
use types::quote::{IndexQuote, Quote};

use crate::config::MarketConfig;
use crate::jitter::Jitter;
use crate::seed::{seed_indices, seed_stocks};
use crate::ticker::Simulator;

/// A record whose numeric fields follow a jittered walk.
pub trait Perturb: Clone + Send + Sync + 'static {
    fn perturbed(&self, jitter: Decimal) -> Self;
}

impl Perturb for Quote {
    fn perturbed(&self, jitter: Decimal) -> Self {
        Quote::perturbed(self, jitter)
    }
}

impl Perturb for IndexQuote {
    fn perturbed(&self, jitter: Decimal) -> Self {
        IndexQuote::perturbed(self, jitter)
    }
}

pub struct MarketSimulator<Q: Perturb> {
    name: &'static str,
    period: Duration,
    quotes: Vec<Q>,
    jitter: Jitter,
}

/// Equity panel simulator.
pub type StockSimulator = MarketSimulator<Quote>;
/// Index panel simulator.
pub type IndexSimulator = MarketSimulator<IndexQuote>;

impl<Q: Perturb> MarketSimulator<Q> {
    pub fn with_quotes(name: &'static str, quotes: Vec<Q>, config: &MarketConfig, seed: u64) -> Self {
        Self {
            name,
            period: config.period,
            quotes,
            jitter: Jitter::new(config.jitter_bound, seed),
        }
    }

    pub fn quotes(&self) -> &[Q] {
        &self.quotes
    }

    pub fn jitter_bound(&self) -> Decimal {
        self.jitter.bound()
    }
}

impl StockSimulator {
    /// Equity simulator over the seed quotes.
    pub fn stocks(config: &MarketConfig, seed: u64) -> Self {
        Self::with_quotes("stocks", seed_stocks(), config, seed)
    }
}

impl IndexSimulator {
    /// Index simulator over the seed levels.
    pub fn indices(config: &MarketConfig, seed: u64) -> Self {
        Self::with_quotes("indices", seed_indices(), config, seed)
    }
}

impl<Q: Perturb> Simulator for MarketSimulator<Q> {
    type Snapshot = Vec<Q>;

    fn name(&self) -> &'static str {
        self.name
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&mut self) {
        let jitter = &mut self.jitter;
        self.quotes = self
            .quotes
            .iter()
            .map(|q| q.perturbed(jitter.draw()))
            .collect();
        debug!(market = self.name, count = self.quotes.len(), "quotes jittered");
    }

    fn snapshot(&self) -> Vec<Q> {
        self.quotes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use types::numeric::MIN_PRICE;

    #[test]
    fn test_stock_tick_preserves_order_and_fields() {
        let mut sim = StockSimulator::stocks(&MarketConfig::stocks(), 11);
        let before = sim.snapshot();
        sim.tick();
        let after = sim.snapshot();

        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(a.symbol, b.symbol);
            assert_eq!(a.sector, b.sector);
            assert_eq!(a.volume, b.volume);
            assert_eq!(a.change, a.price - b.price);
            assert!((a.price - b.price).abs() <= dec!(1.00));
        }
    }

    #[test]
    fn test_index_moves_stay_within_bound() {
        let mut sim = IndexSimulator::indices(&MarketConfig::indices(), 5);
        assert_eq!(sim.jitter_bound(), dec!(0.25));
        for _ in 0..200 {
            let before = sim.snapshot();
            sim.tick();
            for (b, a) in before.iter().zip(sim.quotes()) {
                assert!((a.value - b.value).abs() <= dec!(0.25));
                assert_eq!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_penny_stock_never_goes_non_positive() {
        let mut penny = seed_stocks().remove(0);
        penny.price = dec!(0.02);
        let mut sim = MarketSimulator::with_quotes("penny", vec![penny], &MarketConfig::stocks(), 3);
        for _ in 0..1_000 {
            sim.tick();
            assert!(sim.quotes()[0].price >= MIN_PRICE);
        }
    }

    #[test]
    fn test_ticks_compound_on_rounded_values() {
        let mut sim = StockSimulator::stocks(&MarketConfig::stocks(), 21);
        for _ in 0..50 {
            sim.tick();
            assert!(sim.quotes().iter().all(|q| q.price.scale() <= 2));
        }
    }

    #[test]
    fn test_same_seed_same_walk() {
        let mut a = StockSimulator::stocks(&MarketConfig::stocks(), 8);
        let mut b = StockSimulator::stocks(&MarketConfig::stocks(), 8);
        for _ in 0..10 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
