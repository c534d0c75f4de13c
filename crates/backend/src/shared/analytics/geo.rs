use contracts::shared::analytics::{FilterOptions, FilterSet, GeoSummary, RegionRecord, Selector};

type DimensionFn = fn(&RegionRecord) -> &str;

fn continent(r: &RegionRecord) -> &str {
    &r.continent
}

fn country(r: &RegionRecord) -> &str {
    &r.country
}

fn category(r: &RegionRecord) -> &str {
    &r.category
}

fn seller_type(r: &RegionRecord) -> &str {
    &r.seller_type
}

fn shipping_mode(r: &RegionRecord) -> &str {
    &r.shipping_mode
}

/// Dimension constraints in evaluation order
fn constraints(filter: &FilterSet) -> [(&Selector, DimensionFn); 5] {
    [
        (&filter.continent, continent as DimensionFn),
        (&filter.country, country as DimensionFn),
        (&filter.category, category as DimensionFn),
        (&filter.seller_type, seller_type as DimensionFn),
        (&filter.shipping_mode, shipping_mode as DimensionFn),
    ]
}

/// A region survives only when it satisfies every non-wildcard constraint.
pub fn matches(region: &RegionRecord, filter: &FilterSet) -> bool {
    constraints(filter)
        .into_iter()
        .all(|(selector, dimension)| selector.matches(dimension(region)))
}

/// Strict filter result. May be empty.
pub fn filter_regions<'a>(regions: &'a [RegionRecord], filter: &FilterSet) -> Vec<&'a RegionRecord> {
    regions.iter().filter(|r| matches(r, filter)).collect()
}

/// Substitute the full collection when the filter matched nothing.
///
/// Returns the set to aggregate and whether the substitution happened.
pub fn with_fallback<'a>(
    filtered: Vec<&'a RegionRecord>,
    all: &'a [RegionRecord],
) -> (Vec<&'a RegionRecord>, bool) {
    if filtered.is_empty() && !all.is_empty() {
        (all.iter().collect(), true)
    } else {
        (filtered, false)
    }
}

/// Sales descending; ties keep input order
pub fn rank_by_sales<'a>(regions: &[&'a RegionRecord]) -> Vec<&'a RegionRecord> {
    let mut ranked = regions.to_vec();
    ranked.sort_by(|a, b| b.sales.total_cmp(&a.sales));
    ranked
}

/// Largest `sales` in the set, 0 for an empty set
pub fn max_sales(regions: &[&RegionRecord]) -> f64 {
    regions.iter().map(|r| r.sales).fold(0.0, f64::max)
}

pub fn average_growth(regions: &[&RegionRecord]) -> f64 {
    if regions.is_empty() {
        return 0.0;
    }
    regions.iter().map(|r| r.growth_pct).sum::<f64>() / regions.len() as f64
}

/// Filter, apply the empty-set fallback, then aggregate and rank.
pub fn summarize(regions: &[RegionRecord], filter: &FilterSet) -> GeoSummary {
    let filtered = filter_regions(regions, filter);
    let strict: Vec<RegionRecord> = filtered.iter().map(|r| (*r).clone()).collect();
    let (active, is_fallback) = with_fallback(filtered, regions);

    if is_fallback {
        tracing::debug!(
            "geo filter matched no regions, aggregating all {} instead",
            regions.len()
        );
    }

    let ranking: Vec<RegionRecord> = rank_by_sales(&active).into_iter().cloned().collect();

    GeoSummary {
        filtered: strict,
        is_fallback,
        total_sales: active.iter().map(|r| r.sales).sum(),
        total_orders: active.iter().map(|r| r.orders).sum(),
        total_sellers: active.iter().map(|r| r.sellers).sum(),
        total_buyers: active.iter().map(|r| r.buyers).sum(),
        total_users: active.iter().map(|r| r.users).sum(),
        active_region_count: active.len(),
        highest: ranking.first().cloned(),
        lowest: ranking.last().cloned(),
        average_growth_pct: average_growth(&active),
        ranking,
    }
}

/// Distinct values of one dimension over the unfiltered collection, first-seen order
fn distinct(regions: &[RegionRecord], dimension: DimensionFn) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for region in regions {
        let value = dimension(region);
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

pub fn distinct_countries(regions: &[RegionRecord]) -> Vec<String> {
    distinct(regions, country)
}

/// Choices for every filter dropdown, independent of the current filter
pub fn filter_options(regions: &[RegionRecord]) -> FilterOptions {
    FilterOptions {
        continents: distinct(regions, continent),
        countries: distinct(regions, country),
        categories: distinct(regions, category),
        seller_types: distinct(regions, seller_type),
        shipping_modes: distinct(regions, shipping_mode),
    }
}
