use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Business tables, created on first start
const TABLES: &[(&str, &str)] = &[
    (
        "a001_carpet",
        r#"
        CREATE TABLE a001_carpet (
            id TEXT PRIMARY KEY NOT NULL,
            direction TEXT NOT NULL,
            source TEXT NOT NULL,
            description TEXT NOT NULL,
            quality TEXT NOT NULL,
            length REAL NOT NULL DEFAULT 0,
            width REAL NOT NULL DEFAULT 0,
            rate REAL NOT NULL DEFAULT 0,
            price REAL NOT NULL DEFAULT 0,
            weight TEXT NOT NULL,
            degree TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_worker",
        r#"
        CREATE TABLE a002_worker (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            father_name TEXT NOT NULL DEFAULT '',
            permanent_residency TEXT NOT NULL DEFAULT '',
            current_residency TEXT NOT NULL DEFAULT '',
            nic_file TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_processing_carpet",
        r#"
        CREATE TABLE a003_processing_carpet (
            id TEXT PRIMARY KEY NOT NULL,
            worker_id TEXT NOT NULL,
            width TEXT NOT NULL,
            length TEXT NOT NULL,
            map TEXT NOT NULL DEFAULT '',
            materials TEXT NOT NULL DEFAULT '[]',
            payments TEXT NOT NULL DEFAULT '[]',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a004_staff",
        r#"
        CREATE TABLE a004_staff (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            father_name TEXT NOT NULL DEFAULT '',
            position TEXT NOT NULL,
            phone TEXT NOT NULL DEFAULT '',
            base_salary REAL NOT NULL DEFAULT 0,
            hire_date TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a005_salary",
        r#"
        CREATE TABLE a005_salary (
            id TEXT PRIMARY KEY NOT NULL,
            staff_id TEXT NOT NULL,
            year TEXT NOT NULL,
            month INTEGER NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            paid REAL NOT NULL DEFAULT 0,
            remainder REAL NOT NULL DEFAULT 0,
            description TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a006_expenditure",
        r#"
        CREATE TABLE a006_expenditure (
            id TEXT PRIMARY KEY NOT NULL,
            category TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            description TEXT NOT NULL DEFAULT '',
            year TEXT NOT NULL,
            month INTEGER NOT NULL,
            spender TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a007_income",
        r#"
        CREATE TABLE a007_income (
            id TEXT PRIMARY KEY NOT NULL,
            source TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            description TEXT NOT NULL DEFAULT '',
            year TEXT NOT NULL,
            month INTEGER NOT NULL,
            receiver TEXT NOT NULL,
            consumer TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a008_finance",
        r#"
        CREATE TABLE a008_finance (
            id TEXT PRIMARY KEY NOT NULL,
            from_person TEXT NOT NULL,
            to_person TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            description TEXT NOT NULL DEFAULT '',
            issue_date TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a009_customer",
        r#"
        CREATE TABLE a009_customer (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            father_name TEXT NOT NULL DEFAULT '',
            phone_number TEXT NOT NULL,
            rental_owner TEXT NOT NULL DEFAULT '',
            nic TEXT NOT NULL,
            address TEXT NOT NULL DEFAULT '',
            attachment TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a010_agreement",
        r#"
        CREATE TABLE a010_agreement (
            id TEXT PRIMARY KEY NOT NULL,
            customer_id TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Active',
            shops TEXT NOT NULL DEFAULT '[]',
            advance REAL NOT NULL DEFAULT 0,
            rent REAL NOT NULL DEFAULT 0,
            service REAL NOT NULL DEFAULT 0,
            taken REAL NOT NULL DEFAULT 0,
            floor INTEGER NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a011_rent",
        r#"
        CREATE TABLE a011_rent (
            id TEXT PRIMARY KEY NOT NULL,
            year TEXT NOT NULL,
            month INTEGER NOT NULL,
            floor INTEGER NOT NULL,
            customers TEXT NOT NULL DEFAULT '{}',
            total REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a012_service",
        r#"
        CREATE TABLE a012_service (
            id TEXT PRIMARY KEY NOT NULL,
            year TEXT NOT NULL,
            month INTEGER NOT NULL,
            floor INTEGER NOT NULL,
            is_approved INTEGER NOT NULL DEFAULT 0,
            customers TEXT NOT NULL DEFAULT '{}',
            total REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a013_unit",
        r#"
        CREATE TABLE a013_unit (
            id TEXT PRIMARY KEY NOT NULL,
            unit_number TEXT NOT NULL,
            customer_name TEXT NOT NULL DEFAULT '',
            customer_father_name TEXT NOT NULL DEFAULT '',
            services_description TEXT NOT NULL DEFAULT '',
            service_charge REAL NOT NULL DEFAULT 0,
            current_water_reading REAL NOT NULL DEFAULT 0,
            current_electricity_reading REAL NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'Vacant',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a014_unit_bill",
        r#"
        CREATE TABLE a014_unit_bill (
            id TEXT PRIMARY KEY NOT NULL,
            year TEXT NOT NULL,
            month INTEGER NOT NULL,
            units TEXT NOT NULL DEFAULT '{}',
            total REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
];

/// Run on every start, after the tables exist
const INDEXES: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a005_salary_period
     ON a005_salary (staff_id, year, month) WHERE is_deleted = 0",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a014_unit_bill_period
     ON a014_unit_bill (year, month) WHERE is_deleted = 0",
];

fn sqlite_url(path: &Path) -> anyhow::Result<String> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

async fn table_exists(conn: &DatabaseConnection, table: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?",
            [table.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

pub async fn initialize_database(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_path)?;
    tracing::info!("Connecting to database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    // Minimal schema bootstrap
    for (table, create_sql) in TABLES {
        if !table_exists(&conn, table).await? {
            tracing::info!("Creating {} table", table);
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                create_sql.to_string(),
            ))
            .await?;
        }
    }

    for index_sql in INDEXES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            index_sql.to_string(),
        ))
        .await?;
    }

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_absolute() {
        let url = sqlite_url(Path::new("/data/carpet.db")).unwrap();
        assert_eq!(url, "sqlite:///data/carpet.db?mode=rwc");
    }

    #[test]
    fn test_every_table_is_created_by_its_own_statement() {
        for (table, sql) in TABLES {
            assert!(sql.contains(&format!("CREATE TABLE {} (", table)));
        }
    }

    #[test]
    fn test_indexes_are_idempotent_and_target_known_tables() {
        for sql in INDEXES {
            assert!(sql.contains("IF NOT EXISTS"));
            assert!(TABLES
                .iter()
                .any(|(table, _)| sql.contains(&format!("ON {} (", table))));
        }
    }
}
