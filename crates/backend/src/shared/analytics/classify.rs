use contracts::enums::order_status::OrderStatus;
use contracts::enums::payment_status::PaymentStatus;
use contracts::shared::analytics::{StatusCount, TransactionRecord, Window};

/// Records inside `window` that satisfy `predicate`, in input order.
///
/// Records without a timestamp never match. Single pass, no allocation
/// beyond the result.
pub fn filter_records<'a, P>(
    records: &'a [TransactionRecord],
    window: &Window,
    predicate: P,
) -> Vec<&'a TransactionRecord>
where
    P: Fn(&TransactionRecord) -> bool,
{
    records
        .iter()
        .filter(|r| in_window(r, window) && predicate(*r))
        .collect()
}

pub fn in_window(record: &TransactionRecord, window: &Window) -> bool {
    record
        .created_at
        .as_ref()
        .is_some_and(|ts| window.contains(ts))
}

pub fn is_completed(record: &TransactionRecord) -> bool {
    record.payment_status == PaymentStatus::Completed
}

pub fn has_status(status: OrderStatus) -> impl Fn(&TransactionRecord) -> bool {
    move |record| record.status == status
}

pub fn count_undated(records: &[TransactionRecord]) -> usize {
    records.iter().filter(|r| r.created_at.is_none()).count()
}

/// Orders per fulfilment state inside `window`, every state listed
pub fn status_breakdown(records: &[TransactionRecord], window: &Window) -> Vec<StatusCount> {
    OrderStatus::all()
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: filter_records(records, window, has_status(status)).len() as u64,
        })
        .collect()
}
