use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_ORDER_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS a003_order (
        id TEXT PRIMARY KEY NOT NULL,
        registration_id TEXT NOT NULL,
        line_no INTEGER NOT NULL,
        fecha TEXT NOT NULL,
        nombre_solicitante TEXT NOT NULL,
        tipo_producto TEXT NOT NULL,
        talla TEXT NOT NULL,
        color TEXT,
        cantidad INTEGER NOT NULL,
        created_at TEXT NOT NULL
    );
"#;

const CREATE_ORDER_INDEX_SQL: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_a003_order_fecha ON a003_order (fecha);
"#;

/// Build a sqlite URL that works for absolute paths on every platform
fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize separators; Windows drive letters need a leading slash
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

/// Open the database, create the schema and publish the shared connection.
/// Calling it again after a successful initialization is a no-op.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if DB_CONN.get().is_some() {
        return Ok(());
    }

    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for sql in [CREATE_ORDER_TABLE_SQL, CREATE_ORDER_INDEX_SQL] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    // A concurrent initializer may have won the race; its connection is kept.
    if DB_CONN.set(conn).is_err() {
        tracing::warn!("Database connection was already initialized");
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
