//! Simulator invariants over arbitrary seeds and tick counts
//!
//! Drives the simulators synchronously (no timers) and checks the feed bound,
//! price positivity and the change recompute rules after every step.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use simulation::config::{MarketConfig, NewsConfig};
use simulation::market::{IndexSimulator, MarketSimulator, StockSimulator};
use simulation::news::{NewsSimulator, JUST_NOW};
use simulation::seed::{hotspots, seed_stocks};
use simulation::selection::HotspotSelection;
use simulation::ticker::Simulator;

#[test]
fn test_feed_at_capacity_plus_one() {
    let mut sim = NewsSimulator::new(NewsConfig::default(), 77);
    while sim.feed().len() < 10 {
        sim.tick();
    }
    let tail = sim.feed().get(9).unwrap().clone();
    let head = sim.feed().get(0).unwrap().clone();

    sim.tick();

    assert_eq!(sim.feed().len(), 10);
    assert!(sim.feed().iter().all(|item| item.id != tail.id));
    assert_eq!(sim.feed().get(1).unwrap().id, head.id);
    assert_eq!(sim.feed().get(0).unwrap().timestamp, JUST_NOW);
}

#[test]
fn test_select_a_then_b() {
    let spots = hotspots();
    let mut selection = HotspotSelection::new();
    selection.select(Some(spots[0].clone()));
    selection.select(Some(spots[1].clone()));

    assert_eq!(selection.selected().unwrap().id, spots[1].id);
    assert!(!selection.is_selected(&spots[0]));
}

#[test]
fn test_deep_negative_walk_stays_positive() {
    let mut quote = seed_stocks().remove(3);
    quote.price = dec!(0.01);
    let mut sim = MarketSimulator::with_quotes("floor", vec![quote], &MarketConfig::stocks(), 0);
    for _ in 0..5_000 {
        sim.tick();
        assert!(sim.quotes()[0].price > Decimal::ZERO);
    }
}

proptest! {
    #[test]
    fn prop_feed_never_exceeds_capacity(seed in any::<u64>(), ticks in 0usize..40) {
        let mut sim = NewsSimulator::new(NewsConfig::default(), seed);
        for _ in 0..ticks {
            let previous_head = sim.feed().latest().map(|item| item.id);
            sim.tick();
            prop_assert!(sim.feed().len() <= 10);
            prop_assert_eq!(sim.feed().get(1).map(|item| item.id), previous_head);
        }
    }

    #[test]
    fn prop_stock_ticks_keep_invariants(seed in any::<u64>(), ticks in 1usize..60) {
        let mut sim = StockSimulator::stocks(&MarketConfig::stocks(), seed);
        for _ in 0..ticks {
            let before = sim.snapshot();
            sim.tick();
            for (b, a) in before.iter().zip(sim.quotes()) {
                prop_assert!(a.price > Decimal::ZERO);
                prop_assert_eq!(a.change, a.price - b.price);
                let exact = a.change / b.price * Decimal::ONE_HUNDRED;
                prop_assert!((a.change_percent - exact).abs() < dec!(0.01));
                prop_assert_eq!(&a.symbol, &b.symbol);
                prop_assert_eq!(&a.market_cap, &b.market_cap);
            }
        }
    }

    #[test]
    fn prop_index_ticks_only_move_value_and_percent(seed in any::<u64>(), ticks in 1usize..60) {
        let mut sim = IndexSimulator::indices(&MarketConfig::indices(), seed);
        for _ in 0..ticks {
            let before = sim.snapshot();
            sim.tick();
            for (b, a) in before.iter().zip(sim.quotes()) {
                prop_assert!(a.value > Decimal::ZERO);
                prop_assert!((a.value - b.value).abs() <= dec!(0.25));
                prop_assert_eq!(&a.name, &b.name);
                prop_assert_eq!(&a.symbol, &b.symbol);
                let exact = (a.value - b.value) / b.value * Decimal::ONE_HUNDRED;
                prop_assert!((a.change_percent - exact).abs() < dec!(0.01));
            }
        }
    }
}
