use anyhow::Result;
use sea_orm::{FromQueryResult, Statement};

use crate::shared::data::db::get_connection;

/// Sum of payments received inside [date_from, date_to]
pub async fn get_revenue(date_from: &str, date_to: &str) -> Result<f64> {
    let db = get_connection();

    let sql = r#"
        SELECT COALESCE(SUM(p.amount), 0) AS total
        FROM a004_payment p
        WHERE p.is_deleted = 0
            AND p.payment_date >= ? AND p.payment_date <= ?
    "#;

    #[derive(Debug, FromQueryResult)]
    struct Total {
        total: f64,
    }

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [date_from.into(), date_to.into()],
    );
    let result = Total::find_by_statement(stmt).one(db).await?;
    Ok(result.map(|r| r.total).unwrap_or(0.0))
}

/// Raw per-category expense aggregation
#[derive(Debug, Clone, FromQueryResult)]
pub struct ExpenseAggregation {
    pub category: String,
    pub total: f64,
}

/// Expenses inside [date_from, date_to], grouped by category
pub async fn get_expenses_by_category(
    date_from: &str,
    date_to: &str,
) -> Result<Vec<ExpenseAggregation>> {
    let db = get_connection();

    let sql = r#"
        SELECT e.category, COALESCE(SUM(e.amount), 0) AS total
        FROM a005_expense e
        WHERE e.is_deleted = 0
            AND e.expense_date >= ? AND e.expense_date <= ?
        GROUP BY e.category
        ORDER BY e.category
    "#;

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [date_from.into(), date_to.into()],
    );
    let results = ExpenseAggregation::find_by_statement(stmt).all(db).await?;
    Ok(results)
}

/// Non-cancelled events dated inside [date_from, date_to]
pub async fn get_events_count(date_from: &str, date_to: &str) -> Result<i64> {
    let db = get_connection();

    let sql = r#"
        SELECT COUNT(*) AS total
        FROM a003_event e
        WHERE e.is_deleted = 0
            AND e.status != 'cancelled'
            AND e.event_date >= ? AND e.event_date <= ?
    "#;

    #[derive(Debug, FromQueryResult)]
    struct Count {
        total: i64,
    }

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [date_from.into(), date_to.into()],
    );
    let result = Count::find_by_statement(stmt).one(db).await?;
    Ok(result.map(|r| r.total).unwrap_or(0))
}

/// Outstanding balance over non-cancelled events dated up to `date_to`:
/// agreed price minus payments received per event, negative balances
/// (overpayments) excluded
pub async fn get_outstanding_total(date_to: &str) -> Result<f64> {
    let db = get_connection();

    let sql = r#"
        SELECT COALESCE(SUM(balance), 0) AS total
        FROM (
            SELECT e.price - COALESCE((
                SELECT SUM(p.amount)
                FROM a004_payment p
                WHERE p.is_deleted = 0 AND p.event_ref = e.id
            ), 0) AS balance
            FROM a003_event e
            WHERE e.is_deleted = 0
                AND e.status != 'cancelled'
                AND e.event_date <= ?
        )
        WHERE balance > 0
    "#;

    #[derive(Debug, FromQueryResult)]
    struct Total {
        total: f64,
    }

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [date_to.into()],
    );
    let result = Total::find_by_statement(stmt).one(db).await?;
    Ok(result.map(|r| r.total).unwrap_or(0.0))
}
