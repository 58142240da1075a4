use anyhow::{bail, Context, Result};
use rusqlite::Connection;

/// Ordered schema steps; `user_version` tracks how far a database has
/// applied them.
const MIGRATIONS: &[&str] = &[
    include_str!("schemas/schema_v1.sql"),
    include_str!("schemas/schema_v2.sql"),
];

pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    let newest = MIGRATIONS.len() as i32;
    let current: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .context("failed to read user_version pragma")?;

    if current > newest {
        bail!("database version ({current}) is newer than supported schema ({newest})");
    }
    if current == newest {
        return Ok(());
    }

    let tx = conn
        .transaction()
        .context("failed to open migration transaction")?;

    for (index, sql) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        tx.execute_batch(sql)
            .with_context(|| format!("migration to version {} failed", index + 1))?;
    }

    tx.pragma_update(None, "user_version", newest)
        .context("failed to update user_version pragma")?;
    tx.commit().context("failed to commit migrations")?;

    Ok(())
}
