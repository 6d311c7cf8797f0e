use super::repository::{self, ExpenseAggregation};
use anyhow::Result;
use contracts::dashboards::d400_finance_summary::dto::{CategoryAmount, FinanceSummaryResponse};
use contracts::enums::ExpenseCategory;

pub async fn get_finance_summary(year: i32, month: u32) -> Result<FinanceSummaryResponse> {
    if !(1..=12).contains(&month) {
        anyhow::bail!("Invalid month: {}", month);
    }

    let date_from = format!("{:04}-{:02}-01", year, month);
    let date_to = format!("{:04}-{:02}-{:02}", year, month, last_day_of_month(year, month));

    let revenue = repository::get_revenue(&date_from, &date_to).await?;
    let expenses = repository::get_expenses_by_category(&date_from, &date_to).await?;
    let events_count = repository::get_events_count(&date_from, &date_to).await?;
    let outstanding_total = repository::get_outstanding_total(&date_to).await?;

    Ok(build_summary(
        year,
        month,
        revenue,
        &expenses,
        events_count,
        outstanding_total,
    ))
}

/// Pure row assembly over the aggregation results
fn build_summary(
    year: i32,
    month: u32,
    revenue: f64,
    expenses: &[ExpenseAggregation],
    events_count: i64,
    outstanding_total: f64,
) -> FinanceSummaryResponse {
    let expense_breakdown: Vec<CategoryAmount> = expenses
        .iter()
        .filter(|agg| agg.total > 0.0)
        .map(|agg| CategoryAmount {
            category: agg.category.clone(),
            label: ExpenseCategory::from_code(&agg.category)
                .unwrap_or(ExpenseCategory::Other)
                .display_name()
                .to_string(),
            amount: agg.total,
        })
        .collect();
    let expenses_total: f64 = expense_breakdown.iter().map(|c| c.amount).sum();

    FinanceSummaryResponse {
        period: format!("{:04}-{:02}", year, month),
        revenue,
        expenses_total,
        profit: revenue - expenses_total,
        events_count,
        outstanding_total,
        expense_breakdown,
    }
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    for day in (28..=31).rev() {
        if chrono::NaiveDate::from_ymd_opt(year, month, day).is_some() {
            return day;
        }
    }
    28
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_computes_profit_and_breakdown() {
        let expenses = vec![
            ExpenseAggregation {
                category: "ingredients".into(),
                total: 820.0,
            },
            ExpenseAggregation {
                category: "staff".into(),
                total: 1200.0,
            },
            ExpenseAggregation {
                category: "transport".into(),
                total: 0.0,
            },
        ];
        let summary = build_summary(2030, 6, 5400.0, &expenses, 3, 750.0);

        assert_eq!(summary.period, "2030-06");
        assert!((summary.expenses_total - 2020.0).abs() < 1e-9);
        assert!((summary.profit - 3380.0).abs() < 1e-9);
        assert_eq!(summary.events_count, 3);
        // Zero-spend categories are dropped from the breakdown
        assert_eq!(summary.expense_breakdown.len(), 2);
        assert_eq!(summary.expense_breakdown[0].label, "Ingredients");
    }

    #[test]
    fn empty_month_yields_zeroes() {
        let summary = build_summary(2030, 1, 0.0, &[], 0, 0.0);
        assert_eq!(summary.revenue, 0.0);
        assert_eq!(summary.profit, 0.0);
        assert!(summary.expense_breakdown.is_empty());
    }

    #[test]
    fn december_spans_to_day_31() {
        assert_eq!(last_day_of_month(2030, 12), 31);
    }
}
