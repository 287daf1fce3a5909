//! Event log migrations - embedded SQL files
//!
//! Migrations are compiled into the binary with include_str!.
//! Each migration is a tuple of (name, sql_content), applied in order.

/// All log migrations, embedded at compile time.
/// Format: (filename, sql_content)
///
/// New migrations go in as NNN_description.sql and get an entry here.
pub const LOG_MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    (
        "001_initial_schema.sql",
        include_str!("001_initial_schema.sql"),
    ),
];
