//! Connector color derivation from trading activity
//!
//! A four-tier step function; the thresholds and hex values are exact
//! contract values.

use crate::types::{ConnectorParams, TradingColors, TradingThresholds};

pub const LOW_COLOR: &str = "#FF0000";
pub const MEDIUM_COLOR: &str = "#FFA500";
pub const HIGH_COLOR: &str = "#00FF00";
pub const VERY_HIGH_COLOR: &str = "#00FFFF";

/// Connector color for a trading activity score
pub fn trading_color(trading_activity: f64) -> &'static str {
    if trading_activity < 0.3 {
        LOW_COLOR
    } else if trading_activity < 0.6 {
        MEDIUM_COLOR
    } else if trading_activity < 0.8 {
        HIGH_COLOR
    } else {
        VERY_HIGH_COLOR
    }
}

pub fn derive_connector_params(trading_activity: f64) -> ConnectorParams {
    ConnectorParams {
        base_color: "#C0C0C0".to_string(),
        trading_activity_colors: TradingColors {
            low: LOW_COLOR.to_string(),
            medium: MEDIUM_COLOR.to_string(),
            high: HIGH_COLOR.to_string(),
            very_high: VERY_HIGH_COLOR.to_string(),
        },
        trading_activity_thresholds: TradingThresholds {
            low: 0.3,
            medium: 0.6,
            high: 0.8,
        },
        color_transition_speed: 0.1,
        current_color: trading_color(trading_activity).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tiers() {
        assert_eq!(trading_color(0.0), "#FF0000");
        assert_eq!(trading_color(0.29), "#FF0000");
        assert_eq!(trading_color(0.45), "#FFA500");
        assert_eq!(trading_color(0.75), "#00FF00");
        assert_eq!(trading_color(0.85), "#00FFFF");
        assert_eq!(trading_color(1.0), "#00FFFF");
    }

    #[test]
    fn test_boundaries_land_in_upper_tier() {
        assert_eq!(trading_color(0.3), "#FFA500");
        assert_eq!(trading_color(0.6), "#00FF00");
        assert_eq!(trading_color(0.8), "#00FFFF");
    }
}
