//! Schema initialization modes.

/// How schema initialization treats pre-existing database state.
///
/// The employee seeder defaults to [`SchemaMode::Idempotent`] (re-running it
/// against an initialized database is a no-op), while the shop seeder
/// defaults to [`SchemaMode::DestructiveReset`] (every run starts from a
/// known-empty state). Both seeders accept either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// `CREATE ... IF NOT EXISTS` only; safe to re-run, never drops data.
    Idempotent,
    /// Drop prior state first (children before parents), then recreate.
    DestructiveReset,
}

impl SchemaMode {
    /// Resolve a mode from a CLI reset flag.
    pub fn from_reset_flag(reset: bool) -> Self {
        if reset {
            SchemaMode::DestructiveReset
        } else {
            SchemaMode::Idempotent
        }
    }
}
