use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

/// A named, idempotent schema step. Applied steps are recorded in the `log`
/// table as `migration_applied` rows, keyed by `version`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_core_schema",
        description: "Created employees, accounts, projects and office_hours tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          TEXT PRIMARY KEY,
            full_name   TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS accounts (
            token        TEXT PRIMARY KEY,
            email        TEXT NOT NULL,
            employee_id  TEXT REFERENCES employees(id) ON DELETE SET NULL,
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS projects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            code        TEXT,
            status      TEXT NOT NULL DEFAULT 'active',
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS office_hours (
            day_of_week     INTEGER PRIMARY KEY CHECK(day_of_week BETWEEN 0 AND 6),
            is_working_day  INTEGER NOT NULL DEFAULT 1,
            start_time      TEXT NOT NULL DEFAULT '09:00',
            end_time        TEXT NOT NULL DEFAULT '18:00'
        );
        "#,
    },
    Migration {
        version: "20250301_0002_overtime_tracking",
        description: "Created overtime_tracking, overtime_breaks and overtime tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS overtime_tracking (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id          TEXT NOT NULL UNIQUE REFERENCES employees(id) ON DELETE CASCADE,
            project_id           INTEGER REFERENCES projects(id) ON DELETE SET NULL,
            project_name         TEXT,
            overtime_type        TEXT NOT NULL CHECK(overtime_type IN ('pending_tasks','new_tasks','tracking')),
            memo                 TEXT,
            start_time           TEXT NOT NULL,
            is_paused            INTEGER NOT NULL DEFAULT 0,
            last_pause_time      TEXT,
            total_break_seconds  INTEGER NOT NULL DEFAULT 0 CHECK(total_break_seconds >= 0),
            created_at           TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS overtime_breaks (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            tracking_id             INTEGER NOT NULL REFERENCES overtime_tracking(id) ON DELETE CASCADE,
            break_start_time        TEXT NOT NULL,
            break_end_time          TEXT,
            break_duration_seconds  INTEGER
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_overtime_breaks_open
            ON overtime_breaks(tracking_id) WHERE break_end_time IS NULL;

        CREATE TABLE IF NOT EXISTS overtime (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id           TEXT NOT NULL REFERENCES employees(id),
            project_id            INTEGER REFERENCES projects(id) ON DELETE SET NULL,
            date                  TEXT NOT NULL,
            overtime_type         TEXT NOT NULL CHECK(overtime_type IN ('pending_tasks','new_tasks','tracking')),
            start_time            TEXT NOT NULL,
            end_time              TEXT NOT NULL,
            total_hours           REAL NOT NULL,
            actual_working_hours  REAL NOT NULL,
            description           TEXT,
            status                TEXT NOT NULL DEFAULT 'pending' CHECK(status IN ('pending','approved','rejected')),
            created_at            TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_overtime_employee_date ON overtime(employee_id, date);
        "#,
    },
    Migration {
        version: "20250301_0003_seed_office_hours",
        description: "Seeded office hours: Mon-Fri 09:00-18:00, weekend off",
        sql: r#"
        INSERT OR IGNORE INTO office_hours (day_of_week, is_working_day, start_time, end_time) VALUES
            (0, 0, '09:00', '18:00'),
            (1, 1, '09:00', '18:00'),
            (2, 1, '09:00', '18:00'),
            (3, 1, '09:00', '18:00'),
            (4, 1, '09:00', '18:00'),
            (5, 1, '09:00', '18:00'),
            (6, 0, '09:00', '18:00');
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run one migration and mark it as applied, atomically.
fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;

    tracing::info!(version = m.version, "migration applied");
    Ok(())
}

/// Versions applied so far, in application order.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Run all pending migrations. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    Ok(applied)
}

/// Bring a freshly opened database up to date before any command touches it.
///
/// Used by `init` and every database-backed CLI command.
/// Returns the number of migrations applied by this call (0 when current).
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    let applied = run_pending_migrations(conn)?;
    if applied > 0 {
        tracing::debug!(applied, "database schema upgraded");
    }
    Ok(applied)
}
