//! Metric and grouping columns of the player-season table

use serde::{Serialize, Deserialize};
use std::fmt;

/// Column names the loader expects in the header row
pub mod columns {
    pub const PLAYER_NAME: &str = "player_name";
    pub const SEASON: &str = "season";
    pub const PASSING_YARDS: &str = "passing_yards";
    pub const RECEIVING_YARDS: &str = "receiving_yards";
    pub const RUSHING_YARDS: &str = "rushing_yards";
    pub const TOTAL_YARDS: &str = "total_yards";
    pub const FANTASY_POINTS_PPR: &str = "fantasy_points_ppr";

    /// Every column the dashboard reads, in header order
    pub const ALL: [&str; 7] = [
        PLAYER_NAME,
        SEASON,
        PASSING_YARDS,
        RECEIVING_YARDS,
        RUSHING_YARDS,
        TOTAL_YARDS,
        FANTASY_POINTS_PPR,
    ];
}

/// A numeric column of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    PassingYards,
    ReceivingYards,
    RushingYards,
    TotalYards,
    FantasyPointsPpr,
}

impl Metric {
    /// Metrics offered by the EDA metric selector, in display order
    pub const SELECTABLE: [Metric; 4] = [
        Metric::PassingYards,
        Metric::ReceivingYards,
        Metric::RushingYards,
        Metric::TotalYards,
    ];

    /// Every metric column
    pub const ALL: [Metric; 5] = [
        Metric::PassingYards,
        Metric::ReceivingYards,
        Metric::RushingYards,
        Metric::TotalYards,
        Metric::FantasyPointsPpr,
    ];

    /// Column name in the source CSV
    pub fn column(&self) -> &'static str {
        match self {
            Metric::PassingYards => columns::PASSING_YARDS,
            Metric::ReceivingYards => columns::RECEIVING_YARDS,
            Metric::RushingYards => columns::RUSHING_YARDS,
            Metric::TotalYards => columns::TOTAL_YARDS,
            Metric::FantasyPointsPpr => columns::FANTASY_POINTS_PPR,
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Metric::PassingYards => "Passing Yards",
            Metric::ReceivingYards => "Receiving Yards",
            Metric::RushingYards => "Rushing Yards",
            Metric::TotalYards => "Total Yards",
            Metric::FantasyPointsPpr => "Fantasy Points (PPR)",
        }
    }

    /// Reverse lookup from a column name
    pub fn from_column(name: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.column() == name)
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::PassingYards
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column rows can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    PlayerName,
    Season,
}

impl GroupKey {
    pub fn column(&self) -> &'static str {
        match self {
            GroupKey::PlayerName => columns::PLAYER_NAME,
            GroupKey::Season => columns::SEASON,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::PlayerName => "Player",
            GroupKey::Season => "Season",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_metrics_exclude_fantasy_points() {
        assert_eq!(Metric::SELECTABLE.len(), 4);
        assert!(!Metric::SELECTABLE.contains(&Metric::FantasyPointsPpr));
        assert_eq!(Metric::default(), Metric::PassingYards);
    }

    #[test]
    fn test_column_round_trip_for_every_metric() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_column(metric.column()), Some(metric));
            assert!(columns::ALL.contains(&metric.column()));
        }
        assert_eq!(Metric::from_column("player_name"), None);
    }

    #[test]
    fn test_labels_match_selector_text() {
        assert_eq!(Metric::RushingYards.label(), "Rushing Yards");
        assert_eq!(Metric::FantasyPointsPpr.to_string(), "Fantasy Points (PPR)");
        assert_eq!(GroupKey::Season.column(), "season");
    }
}
