use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, TimeZone};
use contracts::enums::granularity::Granularity;
use contracts::enums::revenue_category::RevenueCategory;
use contracts::shared::analytics::{
    Annotation, AnnotationKind, ScaledSeries, SeriesPoint, TransactionRecord,
};
use serde::{Deserialize, Serialize};

use super::classify::is_completed;
use super::periods::local_midnight;

/// Category -> multiplier table used to scope the revenue chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub all: f64,
    pub electronics: f64,
    pub fashion: f64,
    pub marketplace: f64,
    pub logistics: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            all: 1.0,
            electronics: 1.15,
            fashion: 0.82,
            marketplace: 0.65,
            logistics: 0.38,
        }
    }
}

impl CategoryWeights {
    pub fn weight(&self, category: RevenueCategory) -> f64 {
        match category {
            RevenueCategory::All => self.all,
            RevenueCategory::Electronics => self.electronics,
            RevenueCategory::Fashion => self.fashion,
            RevenueCategory::Marketplace => self.marketplace,
            RevenueCategory::Logistics => self.logistics,
        }
    }
}

/// Sort by timestamp and collapse duplicate timestamps, last value wins.
pub fn normalize(mut points: Vec<SeriesPoint>) -> Vec<SeriesPoint> {
    points.sort_by_key(|p| p.timestamp);
    let mut out: Vec<SeriesPoint> = Vec::with_capacity(points.len());
    for point in points {
        match out.last_mut() {
            Some(last) if last.timestamp == point.timestamp => *last = point,
            _ => out.push(point),
        }
    }
    out
}

/// Multiply every value by `weight`, rounded to whole currency units
pub fn scale_points(points: &[SeriesPoint], weight: f64) -> Vec<SeriesPoint> {
    points
        .iter()
        .map(|p| SeriesPoint::new(p.timestamp, (p.value * weight).round()))
        .collect()
}

/// Positional annotations: the second point is the lift event,
/// the last point is the platform change.
pub fn annotate(historical: &[SeriesPoint]) -> Vec<Annotation> {
    let mut annotations = Vec::with_capacity(2);
    let mut pin = |kind: AnnotationKind, point: &SeriesPoint| {
        annotations.push(Annotation {
            kind,
            label: kind.label().to_string(),
            timestamp: point.timestamp,
            value: point.value,
        })
    };
    if let Some(point) = historical.get(1) {
        pin(AnnotationKind::Lift, point);
    }
    if let Some(point) = historical.last() {
        pin(AnnotationKind::PlatformChange, point);
    }
    annotations
}

/// Scale a historical series and its forecast continuation by the category weight.
///
/// Both halves are scaled independently with the same weight, so their
/// relative shape is preserved.
pub fn weighted_series(
    granularity: Granularity,
    category: RevenueCategory,
    weights: &CategoryWeights,
    historical: &[SeriesPoint],
    forecast: &[SeriesPoint],
) -> ScaledSeries {
    let weight = weights.weight(category);
    let historical = scale_points(&normalize(historical.to_vec()), weight);
    let forecast = scale_points(&normalize(forecast.to_vec()), weight);
    let annotations = annotate(&historical);

    ScaledSeries {
        granularity,
        category,
        weight,
        historical,
        forecast,
        annotations,
    }
}

/// Completed revenue bucketed by local day, ISO week (Monday) or calendar month.
///
/// Points are keyed by the local start of the bucket, ascending.
pub fn bucket_revenue<Tz: TimeZone>(
    records: &[TransactionRecord],
    granularity: Granularity,
    tz: &Tz,
) -> Vec<SeriesPoint> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records.iter().filter(|r| is_completed(r)) {
        let Some(ts) = record.created_at else {
            continue;
        };
        let local_date = ts.with_timezone(tz).date_naive();
        *buckets
            .entry(bucket_start(local_date, granularity))
            .or_insert(0.0) += record.total;
    }

    buckets
        .into_iter()
        .map(|(date, value)| SeriesPoint::new(local_midnight(tz, date), value))
        .collect()
}

/// First local day of the bucket containing `date`
pub fn bucket_start(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Daily => date,
        Granularity::Weekly => date
            .checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
            .unwrap_or(date),
        Granularity::Monthly => date.with_day(1).unwrap_or(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::classify::tests::record;
    use chrono::{DateTime, Duration, Utc};
    use contracts::enums::order_status::OrderStatus;
    use contracts::enums::payment_status::PaymentStatus;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn monthly(values: &[f64]) -> Vec<SeriesPoint> {
        let start = utc("2024-01-01T00:00:00Z");
        values
            .iter()
            .enumerate()
            .map(|(i, v)| SeriesPoint::new(start + Duration::days(31 * i as i64), *v))
            .collect()
    }

    #[test]
    fn test_weights_table() {
        let w = CategoryWeights::default();
        assert_eq!(w.weight(RevenueCategory::All), 1.0);
        assert_eq!(w.weight(RevenueCategory::Electronics), 1.15);
        assert_eq!(w.weight(RevenueCategory::Fashion), 0.82);
        assert_eq!(w.weight(RevenueCategory::Marketplace), 0.65);
        assert_eq!(w.weight(RevenueCategory::Logistics), 0.38);
    }

    #[test]
    fn test_scaling_rounds_to_whole_units() {
        let series = weighted_series(
            Granularity::Monthly,
            RevenueCategory::Fashion,
            &CategoryWeights::default(),
            &monthly(&[1000.0, 1234.0, 999.0]),
            &monthly(&[1100.0]),
        );
        let values: Vec<f64> = series.historical.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![820.0, 1012.0, 819.0]);
        assert_eq!(series.forecast[0].value, 902.0);
        assert_eq!(series.weight, 0.82);
    }

    #[test]
    fn test_all_category_is_identity_on_whole_values() {
        let historical = monthly(&[10.0, 20.0, 30.0]);
        let series = weighted_series(
            Granularity::Monthly,
            RevenueCategory::All,
            &CategoryWeights::default(),
            &historical,
            &[],
        );
        assert_eq!(series.historical, historical);
        assert!(series.forecast.is_empty());
    }

    #[test]
    fn test_scaling_is_linear_within_rounding() {
        let values = [1234.5, 98.2, 45_000.0, 7.7, 310.0, 0.0];
        let points = monthly(&values);
        for category in RevenueCategory::all() {
            let w = CategoryWeights::default().weight(category);
            let scaled_sum: f64 = scale_points(&points, w).iter().map(|p| p.value).sum();
            let sum_scaled = values.iter().sum::<f64>() * w;
            assert!(
                (scaled_sum - sum_scaled).abs() <= values.len() as f64,
                "{category:?}: {scaled_sum} vs {sum_scaled}"
            );
        }
    }

    #[test]
    fn test_annotations_are_positional() {
        let series = weighted_series(
            Granularity::Monthly,
            RevenueCategory::Electronics,
            &CategoryWeights::default(),
            &monthly(&[100.0, 200.0, 300.0, 400.0]),
            &monthly(&[500.0]),
        );
        assert_eq!(series.annotations.len(), 2);
        assert_eq!(series.annotations[0].kind, AnnotationKind::Lift);
        assert_eq!(series.annotations[0].timestamp, series.historical[1].timestamp);
        assert_eq!(series.annotations[0].value, 230.0);
        assert_eq!(series.annotations[1].kind, AnnotationKind::PlatformChange);
        assert_eq!(series.annotations[1].timestamp, series.historical[3].timestamp);
        assert_eq!(series.annotations[1].value, 460.0);
    }

    #[test]
    fn test_short_series_annotations() {
        assert!(annotate(&[]).is_empty());

        let one = annotate(&monthly(&[5.0]));
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].kind, AnnotationKind::PlatformChange);
    }

    #[test]
    fn test_normalize_sorts_and_deduplicates() {
        let t1 = utc("2024-01-01T00:00:00Z");
        let t2 = utc("2024-02-01T00:00:00Z");
        let t3 = utc("2024-03-01T00:00:00Z");
        let points = vec![
            SeriesPoint::new(t3, 3.0),
            SeriesPoint::new(t1, 1.0),
            SeriesPoint::new(t2, 2.0),
            SeriesPoint::new(t1, 10.0),
        ];
        let normalized = normalize(points);
        assert_eq!(
            normalized,
            vec![
                SeriesPoint::new(t1, 10.0),
                SeriesPoint::new(t2, 2.0),
                SeriesPoint::new(t3, 3.0),
            ]
        );
    }

    #[test]
    fn test_bucket_revenue() {
        let records = vec![
            record("a", Some("2025-05-19T08:00:00Z"), 10.0, OrderStatus::Delivered, PaymentStatus::Completed),
            record("b", Some("2025-05-21T08:00:00Z"), 20.0, OrderStatus::Delivered, PaymentStatus::Completed),
            record("c", Some("2025-05-26T08:00:00Z"), 40.0, OrderStatus::Shipped, PaymentStatus::Completed),
            record("d", Some("2025-06-02T08:00:00Z"), 80.0, OrderStatus::Shipped, PaymentStatus::Completed),
            record("e", Some("2025-05-21T09:00:00Z"), 1000.0, OrderStatus::Cancelled, PaymentStatus::Refunded),
            record("f", None, 5000.0, OrderStatus::Delivered, PaymentStatus::Completed),
        ];

        let daily = bucket_revenue(&records, Granularity::Daily, &Utc);
        assert_eq!(daily.len(), 4);
        assert_eq!(daily[1], SeriesPoint::new(utc("2025-05-21T00:00:00Z"), 20.0));

        // 2025-05-19 is a Monday
        let weekly = bucket_revenue(&records, Granularity::Weekly, &Utc);
        assert_eq!(
            weekly,
            vec![
                SeriesPoint::new(utc("2025-05-19T00:00:00Z"), 30.0),
                SeriesPoint::new(utc("2025-05-26T00:00:00Z"), 40.0),
                SeriesPoint::new(utc("2025-06-02T00:00:00Z"), 80.0),
            ]
        );

        let monthly = bucket_revenue(&records, Granularity::Monthly, &Utc);
        assert_eq!(
            monthly,
            vec![
                SeriesPoint::new(utc("2025-05-01T00:00:00Z"), 70.0),
                SeriesPoint::new(utc("2025-06-01T00:00:00Z"), 80.0),
            ]
        );
    }
}
