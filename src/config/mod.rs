use serde::{Deserialize, Serialize};

/// Tunables for the dashboard read models.
///
/// Defaults match the product's shipped windows; callers override individual
/// knobs when a view needs a different horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Trailing window for the gap-filled balance history, in days.
    pub balance_window_days: i64,
    /// Trailing window for the expense heatmap, in days.
    pub heatmap_window_days: i64,
    /// Number of named series in the category trend before the remainder
    /// folds into "Other".
    pub trend_top_n: usize,
    /// Display cap for the upcoming-bills list.
    pub upcoming_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            balance_window_days: 180,
            heatmap_window_days: 91,
            trend_top_n: 5,
            upcoming_limit: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_roundtrip_through_json() {
        let config = DashboardConfig::default();
        let json = serde_json::to_string(&config).expect("serialize config");
        let back: DashboardConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(back.balance_window_days, 180);
        assert_eq!(back.heatmap_window_days, 91);
        assert_eq!(back.trend_top_n, 5);
    }
}
