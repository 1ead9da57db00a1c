//! SQL for the SQLite reservation store.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Key-value table holding the schema version.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Append-only reservations table.
///
/// The autoincrement id defines insertion order. `record` holds the full JSON
/// object including its discriminator; `reservation_type` duplicates the
/// discriminator for filtering.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        reservation_type TEXT NOT NULL,
        record TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// Index for per-kind queries.
pub const CREATE_TYPE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_type ON reservations(reservation_type)";

/// Reads the schema version.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// Writes the schema version.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Appends one record.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (reservation_type, record, created_at)
    VALUES (?1, ?2, ?3)
";

/// Reads every record in insertion order.
pub const SELECT_ALL_RESERVATIONS: &str = "SELECT id, record FROM reservations ORDER BY id";
