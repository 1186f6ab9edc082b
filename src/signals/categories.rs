//! Sector labels for the monitored ticker universe

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    QuantumPurePlay,
    BigTech,
    DefenseIndustrial,
    AiInfrastructure,
    General,
}

impl Sector {
    pub fn label(&self) -> &'static str {
        match self {
            Sector::QuantumPurePlay => "Quantum Pure-Play",
            Sector::BigTech => "Big Tech",
            Sector::DefenseIndustrial => "Defense/Industrial",
            Sector::AiInfrastructure => "AI Infrastructure",
            Sector::General => "General",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Monitored tickers in evaluation order, grouped by sector.
pub const UNIVERSE: &[(&str, Sector)] = &[
    ("IONQ", Sector::QuantumPurePlay),
    ("RGTI", Sector::QuantumPurePlay),
    ("QUBT", Sector::QuantumPurePlay),
    ("IBM", Sector::BigTech),
    ("GOOGL", Sector::BigTech),
    ("MSFT", Sector::BigTech),
    ("AMZN", Sector::BigTech),
    ("HON", Sector::DefenseIndustrial),
    ("LMT", Sector::DefenseIndustrial),
    ("FIX", Sector::AiInfrastructure),
    ("VRT", Sector::AiInfrastructure),
    ("ETN", Sector::AiInfrastructure),
    ("HDSN", Sector::AiInfrastructure),
];

pub struct Categorizer;

impl Categorizer {
    /// Sector for a ticker, [`Sector::General`] when it is not in the universe.
    pub fn categorize(ticker: &str) -> Sector {
        UNIVERSE
            .iter()
            .find(|(symbol, _)| symbol.eq_ignore_ascii_case(ticker))
            .map(|(_, sector)| *sector)
            .unwrap_or(Sector::General)
    }

    pub fn universe() -> Vec<String> {
        UNIVERSE.iter().map(|(symbol, _)| symbol.to_string()).collect()
    }

    pub fn tickers_in(sector: Sector) -> Vec<&'static str> {
        UNIVERSE
            .iter()
            .filter(|(_, s)| *s == sector)
            .map(|(symbol, _)| *symbol)
            .collect()
    }
}
