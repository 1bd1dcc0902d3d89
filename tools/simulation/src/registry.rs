//! Trader registry
//!
//! Owns every trader in the session. Iteration order is creation order
//! (`Human_1..N` then `Algo_1..M`), which is also the order algorithmic
//! orders are applied in.

use crate::config::MarketConfig;
use rand::Rng;
use std::collections::HashMap;
use types::ids::TraderName;
use types::trader::{Strategy, Trader, TraderKind};

/// Ordered set of traders keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TraderRegistry {
    traders: Vec<Trader>,
    index: HashMap<TraderName, usize>,
}

impl TraderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh registry of `num_humans` humans and `num_algos` algos.
    ///
    /// Each algo gets a strategy drawn independently and uniformly from
    /// [`Strategy::ALL`] using `rng`.
    pub fn populate<R: Rng + ?Sized>(
        num_humans: usize,
        num_algos: usize,
        config: &MarketConfig,
        rng: &mut R,
    ) -> Self {
        let mut registry = Self::new();

        for i in 1..=num_humans {
            registry.insert(Trader::new(
                TraderName::human(i),
                TraderKind::Human,
                config.starting_cash,
                config.starting_shares,
            ));
        }

        for i in 1..=num_algos {
            let strategy = Strategy::ALL[rng.gen_range(0..Strategy::ALL.len())];
            registry.insert(Trader::new(
                TraderName::algo(i),
                TraderKind::Algo(strategy),
                config.starting_cash,
                config.starting_shares,
            ));
        }

        registry
    }

    fn insert(&mut self, trader: Trader) {
        self.index.insert(trader.name().clone(), self.traders.len());
        self.traders.push(trader);
    }

    /// Look up a trader by name.
    pub fn get(&self, name: &TraderName) -> Option<&Trader> {
        self.index.get(name).map(|&i| &self.traders[i])
    }

    pub(crate) fn get_mut(&mut self, name: &TraderName) -> Option<&mut Trader> {
        match self.index.get(name) {
            Some(&i) => self.traders.get_mut(i),
            None => None,
        }
    }

    /// All traders in creation order.
    pub fn list(&self) -> &[Trader] {
        &self.traders
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Trader> {
        self.traders.iter_mut()
    }

    /// Human traders in creation order.
    pub fn humans(&self) -> impl Iterator<Item = &Trader> {
        self.traders.iter().filter(|t| t.is_human())
    }

    /// Algorithmic traders in creation order.
    pub fn algos(&self) -> impl Iterator<Item = &Trader> {
        self.traders.iter().filter(|t| !t.is_human())
    }

    pub fn len(&self) -> usize {
        self.traders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traders.is_empty()
    }
}
