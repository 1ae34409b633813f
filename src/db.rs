use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use tracing::info;

use crate::error::Result;
use crate::naming;
use crate::settings::Settings;

pub type Pool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type PooledConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite leaves foreign keys unenforced unless asked, per connection.
#[derive(Debug, Clone, Copy)]
struct EnforceForeignKeys;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for EnforceForeignKeys {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        enable_foreign_keys(conn).map_err(diesel::r2d2::Error::QueryError)
    }
}

fn enable_foreign_keys(conn: &SqliteConnection) -> diesel::QueryResult<()> {
    conn.batch_execute("PRAGMA foreign_keys = ON;")
}

/// Builds the connection pool and makes sure the tables exist.
pub fn establish_connection(settings: &Settings) -> Result<Pool> {
    let manager = ConnectionManager::<SqliteConnection>::new(settings.database_url.as_str());
    let pool = r2d2::Pool::builder()
        .max_size(settings.pool_size)
        .connection_customizer(Box::new(EnforceForeignKeys))
        .build(manager)?;

    let conn = pool.get()?;
    create_schema(&conn)?;

    info!(
        database_url = %settings.database_url,
        pool_size = settings.pool_size,
        "database pool ready"
    );

    Ok(pool)
}

/// Opens a single connection with foreign keys enforced, without pooling.
pub fn connect(database_url: &str) -> Result<SqliteConnection> {
    let conn = SqliteConnection::establish(database_url)?;
    enable_foreign_keys(&conn)?;
    Ok(conn)
}

pub fn create_schema(conn: &SqliteConnection) -> Result<()> {
    conn.batch_execute(&naming::schema_sql())?;
    info!(tables = naming::TABLES.len(), "schema created");
    Ok(())
}
