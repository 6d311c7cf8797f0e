use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Create the table if it is not present yet (minimal schema bootstrap,
/// checked against sqlite_master)
async fn ensure_table(
    conn: &DatabaseConnection,
    table_name: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    let check = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        table_name
    );
    let existing = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", table_name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/app.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    ensure_table(
        &conn,
        "a001_client",
        r#"
        CREATE TABLE a001_client (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            company TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            address TEXT NOT NULL DEFAULT '',
            lead_source TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a002_quote",
        r#"
        CREATE TABLE a002_quote (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            client_ref TEXT NOT NULL,
            event_date TEXT NOT NULL,
            venue TEXT NOT NULL DEFAULT '',
            guest_count INTEGER NOT NULL DEFAULT 0,
            service_kind TEXT NOT NULL DEFAULT '',
            estimated_price REAL NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'new',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a003_event",
        r#"
        CREATE TABLE a003_event (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            client_ref TEXT NOT NULL,
            quote_ref TEXT,
            event_date TEXT NOT NULL,
            start_time TEXT NOT NULL DEFAULT '',
            end_time TEXT NOT NULL DEFAULT '',
            venue TEXT NOT NULL DEFAULT '',
            guest_count INTEGER NOT NULL DEFAULT 0,
            price REAL NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'scheduled',
            lines_json TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a004_payment",
        r#"
        CREATE TABLE a004_payment (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            event_ref TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            payment_date TEXT NOT NULL,
            method TEXT NOT NULL DEFAULT 'cash',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a005_expense",
        r#"
        CREATE TABLE a005_expense (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            event_ref TEXT,
            category TEXT NOT NULL DEFAULT 'other',
            amount REAL NOT NULL DEFAULT 0,
            expense_date TEXT NOT NULL,
            supplier TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a006_ingredient",
        r#"
        CREATE TABLE a006_ingredient (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            category TEXT NOT NULL DEFAULT 'other',
            package_size REAL NOT NULL DEFAULT 0,
            package_unit TEXT NOT NULL DEFAULT 'ml',
            package_price REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a007_cocktail",
        r#"
        CREATE TABLE a007_cocktail (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            style TEXT NOT NULL DEFAULT 'shaken',
            glass TEXT NOT NULL DEFAULT '',
            garnish TEXT NOT NULL DEFAULT '',
            lines_json TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a008_task",
        r#"
        CREATE TABLE a008_task (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            event_ref TEXT,
            due_date TEXT,
            done INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a009_document",
        r#"
        CREATE TABLE a009_document (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            kind TEXT NOT NULL DEFAULT 'proposal',
            event_ref TEXT NOT NULL,
            client_ref TEXT NOT NULL,
            issue_date TEXT NOT NULL,
            total_amount REAL NOT NULL DEFAULT 0,
            terms TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'draft',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
