use contracts::shared::analytics::{ColorTier, MarkerAttributes, RegionRecord};
use serde::{Deserialize, Serialize};

use super::geo::max_sales;

/// Comparison used by one colour breakpoint against `growth_pct`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierRule {
    /// `growth >= threshold`
    AtLeast,
    /// `growth <= threshold`
    AtMost,
    /// `growth < threshold`
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBreakpoint {
    pub rule: TierRule,
    pub threshold: f64,
    pub tier: ColorTier,
}

impl TierBreakpoint {
    pub const fn new(rule: TierRule, threshold: f64, tier: ColorTier) -> Self {
        Self {
            rule,
            threshold,
            tier,
        }
    }

    pub fn matches(&self, growth_pct: f64) -> bool {
        match self.rule {
            TierRule::AtLeast => growth_pct >= self.threshold,
            TierRule::AtMost => growth_pct <= self.threshold,
            TierRule::Below => growth_pct < self.threshold,
        }
    }
}

/// Breakpoints in evaluation order. First match wins; the order is part of
/// the contract because the ranges overlap (-9 is both `<= -8` and `< 0`).
pub const DEFAULT_COLOR_TIERS: [TierBreakpoint; 4] = [
    TierBreakpoint::new(TierRule::AtLeast, 10.0, ColorTier::Accelerating),
    TierBreakpoint::new(TierRule::AtLeast, 4.0, ColorTier::Growing),
    TierBreakpoint::new(TierRule::AtMost, -8.0, ColorTier::Declining),
    TierBreakpoint::new(TierRule::Below, 0.0, ColorTier::Cooling),
];

/// Marker geometry and colour table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub altitude_base: f64,
    pub altitude_span: f64,
    pub radius_base: f64,
    pub radius_span: f64,
    pub color_tiers: Vec<TierBreakpoint>,
    pub fallback_tier: ColorTier,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            altitude_base: 0.12,
            altitude_span: 0.28,
            radius_base: 0.04,
            radius_span: 0.08,
            color_tiers: DEFAULT_COLOR_TIERS.to_vec(),
            fallback_tier: ColorTier::Flat,
        }
    }
}

impl MarkerConfig {
    pub fn tier_for(&self, growth_pct: f64) -> ColorTier {
        self.color_tiers
            .iter()
            .find(|bp| bp.matches(growth_pct))
            .map(|bp| bp.tier)
            .unwrap_or(self.fallback_tier)
    }
}

/// `sales / max_sales` clamped into `[0, 1]`, 0 when `max_sales` is not positive
pub fn relative_intensity(sales: f64, max_sales: f64) -> f64 {
    if max_sales <= 0.0 {
        return 0.0;
    }
    (sales / max_sales).clamp(0.0, 1.0)
}

pub fn derive_marker(region: &RegionRecord, max_sales: f64, config: &MarkerConfig) -> MarkerAttributes {
    let intensity = relative_intensity(region.sales, max_sales);
    MarkerAttributes {
        region: region.name.clone(),
        latitude: region.latitude,
        longitude: region.longitude,
        intensity,
        altitude: config.altitude_base + intensity * config.altitude_span,
        radius: config.radius_base + intensity * config.radius_span,
        color_tier: config.tier_for(region.growth_pct),
    }
}

/// Markers for the displayed region set, scaled against its own maximum
pub fn derive_markers(regions: &[&RegionRecord], config: &MarkerConfig) -> Vec<MarkerAttributes> {
    let max = max_sales(regions);
    regions
        .iter()
        .map(|region| derive_marker(region, max, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::geo::tests::{region, regions};

    fn tier(growth: f64) -> ColorTier {
        MarkerConfig::default().tier_for(growth)
    }

    #[test]
    fn test_color_tier_scenarios() {
        assert_eq!(tier(12.0), ColorTier::Accelerating);
        assert_eq!(tier(-9.0), ColorTier::Declining);
        assert_eq!(tier(2.0), ColorTier::Flat);
    }

    #[test]
    fn test_color_tier_boundaries() {
        assert_eq!(tier(10.0), ColorTier::Accelerating);
        assert_eq!(tier(9.99), ColorTier::Growing);
        assert_eq!(tier(4.0), ColorTier::Growing);
        assert_eq!(tier(3.99), ColorTier::Flat);
        assert_eq!(tier(0.0), ColorTier::Flat);
        assert_eq!(tier(-0.01), ColorTier::Cooling);
        assert_eq!(tier(-7.99), ColorTier::Cooling);
        assert_eq!(tier(-8.0), ColorTier::Declining);
        assert_eq!(tier(f64::NAN), ColorTier::Flat);
    }

    #[test]
    fn test_breakpoint_order_is_first_match() {
        // with the overlapping rules swapped, -9 lands in the broader bucket
        let config = MarkerConfig {
            color_tiers: vec![
                TierBreakpoint::new(TierRule::Below, 0.0, ColorTier::Cooling),
                TierBreakpoint::new(TierRule::AtMost, -8.0, ColorTier::Declining),
            ],
            ..MarkerConfig::default()
        };
        assert_eq!(config.tier_for(-9.0), ColorTier::Cooling);
    }

    #[test]
    fn test_geometry() {
        let config = MarkerConfig::default();
        let r = region("X", "C", "Africa", "fashion", "smb", "standard", 500.0, 1.0);

        let half = derive_marker(&r, 1000.0, &config);
        assert_eq!(half.intensity, 0.5);
        assert!((half.altitude - 0.26).abs() < 1e-12);
        assert!((half.radius - 0.08).abs() < 1e-12);

        let full = derive_marker(&r, 500.0, &config);
        assert_eq!(full.intensity, 1.0);
        assert!((full.altitude - 0.40).abs() < 1e-12);
        assert!((full.radius - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_zero_max_gives_zero_intensity() {
        let config = MarkerConfig::default();
        let r = region("X", "C", "Africa", "fashion", "smb", "standard", 500.0, 1.0);
        let marker = derive_marker(&r, 0.0, &config);
        assert_eq!(marker.intensity, 0.0);
        assert_eq!(marker.altitude, config.altitude_base);
        assert_eq!(marker.radius, config.radius_base);
    }

    #[test]
    fn test_intensity_is_monotonic_in_sales() {
        let max = 2000.0;
        let mut previous = -1.0;
        for step in 0..=40 {
            let sales = step as f64 * 50.0;
            let intensity = relative_intensity(sales, max);
            assert!((0.0..=1.0).contains(&intensity));
            assert!(intensity >= previous);
            previous = intensity;
        }
        assert_eq!(relative_intensity(5000.0, max), 1.0);
    }

    #[test]
    fn test_markers_for_region_set() {
        let all = regions();
        let refs: Vec<&RegionRecord> = all.iter().collect();
        let markers = derive_markers(&refs, &MarkerConfig::default());

        assert_eq!(markers.len(), all.len());
        let austin = markers.iter().find(|m| m.region == "Austin").unwrap();
        assert_eq!(austin.intensity, 1.0);
        assert_eq!(austin.color_tier, ColorTier::Accelerating);
        let jhb = markers.iter().find(|m| m.region == "Johannesburg").unwrap();
        assert_eq!(jhb.color_tier, ColorTier::Declining);
    }
}
