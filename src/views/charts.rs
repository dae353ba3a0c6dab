//! Derives chart-ready series from the record set.
//!
//! Three series shapes are produced: per-category totals (pie), per-month
//! totals (bar), and per-day totals split by category (line). The
//! presentation layer picks colours and draws; nothing here knows about
//! rendering.

use std::collections::BTreeMap;

use time::Date;

use crate::models::{Category, Expense};

/// The kind of chart the presentation layer wants data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Share of spending per category.
    Pie,
    /// Total spending per calendar month.
    Bar,
    /// Spending per day, one line per category.
    Line,
}

/// The data behind one chart, matching the requested [ChartKind].
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSeries {
    /// Per-category totals in first-encountered order.
    Pie(Vec<(Category, f64)>),
    /// Per-month totals in chronological order.
    Bar(Vec<MonthlyTotal>),
    /// Per-day, per-category totals in chronological order.
    Line(DailySeries),
}

/// Produce the series for `kind` over `records`.
pub fn chart_series(records: &[Expense], kind: ChartKind) -> ChartSeries {
    match kind {
        ChartKind::Pie => ChartSeries::Pie(category_totals(records)),
        ChartKind::Bar => ChartSeries::Bar(monthly_series(records)),
        ChartKind::Line => ChartSeries::Line(daily_category_series(records)),
    }
}

/// Sum the amounts of `records` per category.
///
/// Categories appear in the order they are first encountered; categories
/// with no records are absent rather than zero-valued.
pub fn category_totals(records: &[Expense]) -> Vec<(Category, f64)> {
    let mut totals: Vec<(Category, f64)> = Vec::new();

    for expense in records {
        match totals
            .iter_mut()
            .find(|(category, _)| *category == expense.category)
        {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }

    totals
}

/// The total spent in one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1 through 12.
    pub month: u8,
    /// The sum of amounts for records dated in this month.
    pub total: f64,
}

impl MonthlyTotal {
    /// The `"YYYY-MM"` label for this bucket.
    ///
    /// The month is zero-padded so that labels sort lexicographically in
    /// chronological order ("2024-09" before "2024-10").
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Bucket `records` by calendar year and month and sum the amounts per
/// bucket, in ascending chronological order.
///
/// Ordering is numeric on `(year, month)`, never on formatted labels.
pub fn monthly_series(records: &[Expense]) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<(i32, u8), f64> = BTreeMap::new();

    for expense in records {
        let key = (expense.date.year(), expense.date.month() as u8);
        *buckets.entry(key).or_insert(0.0) += expense.amount;
    }

    buckets
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal { year, month, total })
        .collect()
}

/// One row of a [DailySeries]: a date and one total per series category.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow {
    /// The date this row covers.
    pub date: Date,
    /// Totals aligned with [DailySeries::categories]; 0.0 where nothing was
    /// recorded for that category on this date.
    pub totals: Vec<f64>,
}

/// Per-day spending broken down by category.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    /// The distinct categories present in the record set, in
    /// first-encountered order. Categories absent from the whole set never
    /// appear as columns.
    pub categories: Vec<Category>,
    /// One row per distinct date, in ascending order.
    pub rows: Vec<DailyRow>,
}

/// Produce one row per distinct date (ascending) with a total per category
/// present in `records`.
pub fn daily_category_series(records: &[Expense]) -> DailySeries {
    let mut categories: Vec<Category> = Vec::new();
    for expense in records {
        if !categories.contains(&expense.category) {
            categories.push(expense.category);
        }
    }

    let mut dates: Vec<Date> = records.iter().map(|expense| expense.date).collect();
    dates.sort();
    dates.dedup();

    let rows = dates
        .into_iter()
        .map(|date| {
            let totals = categories
                .iter()
                .map(|&category| {
                    records
                        .iter()
                        .filter(|expense| expense.date == date && expense.category == category)
                        .map(|expense| expense.amount)
                        .sum()
                })
                .collect();

            DailyRow { date, totals }
        })
        .collect();

    DailySeries { categories, rows }
}

#[cfg(test)]
mod charts_tests {
    use time::macros::date;

    use crate::models::{Category, Expense, ExpenseId};

    use super::{
        ChartKind, ChartSeries, category_totals, chart_series, daily_category_series,
        monthly_series,
    };

    fn expense(id: ExpenseId, amount: f64, category: Category, date: time::Date) -> Expense {
        Expense {
            id,
            name: format!("expense {id}"),
            amount,
            category,
            date,
        }
    }

    #[test]
    fn category_totals_sums_per_category_with_no_extra_keys() {
        let records = vec![
            expense(1, 10.0, Category::Food, date!(2024 - 09 - 01)),
            expense(2, 5.0, Category::Food, date!(2024 - 09 - 02)),
            expense(3, 20.0, Category::Housing, date!(2024 - 09 - 03)),
        ];

        let totals = category_totals(&records);

        assert_eq!(
            vec![(Category::Food, 15.0), (Category::Housing, 20.0)],
            totals
        );
    }

    #[test]
    fn category_totals_on_empty_records_is_empty() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn monthly_series_buckets_in_chronological_order() {
        let records = vec![
            expense(1, 7.0, Category::Food, date!(2024 - 10 - 01)),
            expense(2, 5.0, Category::Food, date!(2024 - 09 - 15)),
        ];

        let series = monthly_series(&records);

        let labelled: Vec<(String, f64)> = series
            .iter()
            .map(|bucket| (bucket.label(), bucket.total))
            .collect();
        assert_eq!(
            vec![("2024-09".to_owned(), 5.0), ("2024-10".to_owned(), 7.0)],
            labelled
        );
    }

    #[test]
    fn monthly_labels_are_zero_padded_and_sort_lexicographically() {
        let records = vec![
            expense(1, 1.0, Category::Food, date!(2024 - 09 - 01)),
            expense(2, 1.0, Category::Food, date!(2024 - 10 - 01)),
            expense(3, 1.0, Category::Food, date!(2024 - 11 - 01)),
        ];

        let labels: Vec<String> = monthly_series(&records)
            .iter()
            .map(|bucket| bucket.label())
            .collect();

        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(vec!["2024-09", "2024-10", "2024-11"], labels);
        assert_eq!(sorted, labels);
    }

    #[test]
    fn monthly_series_merges_records_within_a_month() {
        let records = vec![
            expense(1, 5.0, Category::Food, date!(2024 - 09 - 01)),
            expense(2, 2.5, Category::Housing, date!(2024 - 09 - 28)),
        ];

        let series = monthly_series(&records);

        assert_eq!(1, series.len());
        assert_eq!(7.5, series[0].total);
    }

    #[test]
    fn daily_series_fills_zero_for_missing_category_days() {
        let records = vec![
            expense(1, 10.0, Category::Food, date!(2024 - 09 - 02)),
            expense(2, 20.0, Category::Housing, date!(2024 - 09 - 01)),
            expense(3, 5.0, Category::Food, date!(2024 - 09 - 02)),
        ];

        let series = daily_category_series(&records);

        // Categories in first-encountered order, dates ascending.
        assert_eq!(vec![Category::Food, Category::Housing], series.categories);
        assert_eq!(2, series.rows.len());
        assert_eq!(date!(2024 - 09 - 01), series.rows[0].date);
        assert_eq!(vec![0.0, 20.0], series.rows[0].totals);
        assert_eq!(date!(2024 - 09 - 02), series.rows[1].date);
        assert_eq!(vec![15.0, 0.0], series.rows[1].totals);
    }

    #[test]
    fn daily_series_excludes_absent_categories() {
        let records = vec![expense(1, 10.0, Category::Food, date!(2024 - 09 - 02))];

        let series = daily_category_series(&records);

        assert_eq!(vec![Category::Food], series.categories);
    }

    #[test]
    fn chart_series_dispatches_on_kind() {
        let records = vec![expense(1, 10.0, Category::Food, date!(2024 - 09 - 02))];

        assert!(matches!(
            chart_series(&records, ChartKind::Pie),
            ChartSeries::Pie(_)
        ));
        assert!(matches!(
            chart_series(&records, ChartKind::Bar),
            ChartSeries::Bar(_)
        ));
        assert!(matches!(
            chart_series(&records, ChartKind::Line),
            ChartSeries::Line(_)
        ));
    }
}
