use chrono::NaiveDate;

use engine::{
    AggregationOptions, CategoryOrder, CategoryTotal, ComparisonLabel, ExpenseRecord,
    FilterCriteria, Money, MonthlyTotal, RawAmount, Snapshot, UNKNOWN_MONTH, by_category,
    by_month, filter, summarize,
};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn major(value: i64) -> Money {
    Money::new(value * 100)
}

fn sample() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new("Food", 50.0, Some("2024-01-05")),
        ExpenseRecord::new("Food", 30.0, Some("2024-01-20")),
        ExpenseRecord::new("Rent", 500.0, Some("2024-02-01")),
    ]
}

#[test]
fn basic_aggregation() {
    let records = sample();

    let figures = summarize(&records, major(1000));
    assert_eq!(figures.total, major(580));
    assert_eq!(figures.remaining, major(420));

    assert_eq!(
        by_category(&records, CategoryOrder::FirstSeen),
        vec![
            CategoryTotal {
                category: "Food".to_string(),
                total: major(80),
            },
            CategoryTotal {
                category: "Rent".to_string(),
                total: major(500),
            },
        ]
    );
    assert_eq!(
        by_month(&records),
        vec![
            MonthlyTotal {
                month: "2024-01".to_string(),
                total: major(80),
            },
            MonthlyTotal {
                month: "2024-02".to_string(),
                total: major(500),
            },
        ]
    );
}

#[test]
fn category_substring_is_case_insensitive() {
    let records = vec![
        ExpenseRecord::new("Food", 10.0, Some("2024-01-01")),
        ExpenseRecord::new("Transport", 20.0, Some("2024-01-02")),
    ];
    let criteria = FilterCriteria {
        category: Some("foo".to_string()),
        ..Default::default()
    };

    let matched = filter(&records, &criteria);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].category, "Food");
}

#[test]
fn lower_bound_excludes_earlier_dates() {
    let criteria = FilterCriteria {
        from: Some(date("2024-01-10")),
        ..Default::default()
    };

    let dates: Vec<_> = filter(&sample(), &criteria)
        .into_iter()
        .filter_map(|r| r.date)
        .collect();
    assert_eq!(dates, vec!["2024-01-20", "2024-02-01"]);
}

#[test]
fn overspend_goes_negative() {
    let records = vec![ExpenseRecord::new("Shopping", 150.0, Some("2024-03-03"))];
    let figures = summarize(&records, major(100));
    assert_eq!(figures.total, major(150));
    assert_eq!(figures.remaining, major(-50));
}

#[test]
fn totals_agree_across_views() {
    let records = vec![
        ExpenseRecord::new("Food", 12.34, Some("2024-01-05")),
        ExpenseRecord::new("Rent", "700.10", Some("2024-02-01")),
        ExpenseRecord::new("Other", 0.01, None),
        ExpenseRecord::new("Food", 0.1, Some("not a date")),
        ExpenseRecord::new("Transport", "n/a", Some("2024-02-11")),
    ];

    let total = summarize(&records, Money::ZERO).total;
    let by_cat: Money = by_category(&records, CategoryOrder::FirstSeen)
        .iter()
        .map(|c| c.total)
        .sum();
    let by_mon: Money = by_month(&records).iter().map(|m| m.total).sum();

    assert_eq!(total, Money::new(1234 + 70010 + 1 + 10));
    assert_eq!(by_cat, total);
    assert_eq!(by_mon, total);
}

#[test]
fn malformed_amounts_count_as_zero() {
    let records = vec![
        ExpenseRecord::new("Food", RawAmount::Missing, Some("2024-01-01")),
        ExpenseRecord::new("Food", "abc", Some("2024-01-02")),
        ExpenseRecord::new("Food", f64::NAN, Some("2024-01-03")),
        ExpenseRecord::new("Food", 5.0, Some("2024-01-04")),
    ];

    let figures = summarize(&records, major(10));
    assert_eq!(figures.total, major(5));
    assert_eq!(figures.remaining, major(5));
    assert_eq!(by_category(&records, CategoryOrder::FirstSeen)[0].total, major(5));
}

#[test]
fn undated_records_land_in_unknown_bucket_last() {
    let records = vec![
        ExpenseRecord::new("Food", 1.0, None),
        ExpenseRecord::new("Food", 2.0, Some("2023-12-31")),
        ExpenseRecord::new("Food", 3.0, Some("31/12/2023")),
        ExpenseRecord::new("Food", 4.0, Some("2024-01-01")),
    ];

    let months: Vec<_> = by_month(&records)
        .into_iter()
        .map(|m| (m.month, m.total))
        .collect();
    assert_eq!(
        months,
        vec![
            ("2023-12".to_string(), major(2)),
            ("2024-01".to_string(), major(4)),
            (UNKNOWN_MONTH.to_string(), major(4)),
        ]
    );
}

#[test]
fn date_filter_drops_undated_records() {
    let records = vec![
        ExpenseRecord::new("Food", 1.0, None),
        ExpenseRecord::new("Food", 2.0, Some("2024-01-15")),
        ExpenseRecord::new("Food", 3.0, Some("31/12/2023")),
        ExpenseRecord::new("Food", 4.0, Some("")),
    ];

    for criteria in [
        FilterCriteria {
            to: Some(date("2024-12-31")),
            ..Default::default()
        },
        FilterCriteria {
            from: Some(date("2000-01-01")),
            ..Default::default()
        },
    ] {
        let matched = filter(&records, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].date.as_deref(), Some("2024-01-15"));
    }
    assert_eq!(filter(&records, &FilterCriteria::default()).len(), 4);
}

#[test]
fn filtering_twice_changes_nothing() {
    let criteria = FilterCriteria {
        category: Some("o".to_string()),
        from: Some(date("2024-01-06")),
        to: None,
    };

    let once = filter(&sample(), &criteria);
    let twice = filter(&once, &criteria);
    assert_eq!(once, twice);
}

#[test]
fn alphabetical_order_is_opt_in() {
    let records = vec![
        ExpenseRecord::new("Transport", 1.0, Some("2024-01-01")),
        ExpenseRecord::new("Food", 2.0, Some("2024-01-02")),
    ];

    let first_seen: Vec<_> = by_category(&records, CategoryOrder::FirstSeen)
        .into_iter()
        .map(|c| c.category)
        .collect();
    let alphabetical: Vec<_> = by_category(&records, CategoryOrder::Alphabetical)
        .into_iter()
        .map(|c| c.category)
        .collect();

    assert_eq!(first_seen, vec!["Transport", "Food"]);
    assert_eq!(alphabetical, vec!["Food", "Transport"]);
}

#[test]
fn derive_uses_filtered_set_everywhere() {
    let snapshot = Snapshot::new(sample(), major(1000));
    let criteria = FilterCriteria {
        category: Some("rent".to_string()),
        ..Default::default()
    };

    let views = snapshot.derive(&criteria, &AggregationOptions::default());
    assert_eq!(views.filtered.len(), 1);
    assert_eq!(views.summary.total, major(500));
    assert_eq!(views.summary.remaining, major(500));
    assert_eq!(views.by_category.len(), 1);
    assert_eq!(views.by_month[0].month, "2024-02");

    let labels: Vec<_> = views.comparison.iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            ComparisonLabel::Salary,
            ComparisonLabel::Expenses,
            ComparisonLabel::Remaining,
        ]
    );
    assert_eq!(views.comparison[0].value, major(1000));
    assert_eq!(views.comparison[1].value, major(500));
}

#[test]
fn derive_is_deterministic() {
    let snapshot = Snapshot::new(sample(), major(1000));
    let criteria = FilterCriteria::default();
    let options = AggregationOptions::default();

    assert_eq!(
        snapshot.derive(&criteria, &options),
        snapshot.derive(&criteria, &options)
    );
}

#[test]
fn empty_snapshot_yields_empty_views() {
    let views = Snapshot::default().derive(&FilterCriteria::default(), &AggregationOptions::default());
    assert!(views.filtered.is_empty());
    assert!(views.by_category.is_empty());
    assert!(views.by_month.is_empty());
    assert_eq!(views.summary.total, Money::ZERO);
    assert_eq!(views.summary.remaining, Money::ZERO);
}

#[test]
fn records_decode_from_loose_json() {
    let records: Vec<ExpenseRecord> = serde_json::from_str(
        r#"[
            {"category": "Food", "amount": 12.5, "date": "2024-05-01"},
            {"category": "Food", "amount": "7.5"},
            {"category": "Rent"}
        ]"#,
    )
    .unwrap();

    let figures = summarize(&records, Money::ZERO);
    assert_eq!(figures.total, major(20));
    assert_eq!(records[2].amount, RawAmount::Missing);
}
