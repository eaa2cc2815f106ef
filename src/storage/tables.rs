use redb::TableDefinition;

/// Folder records: folder id -> encoded folder. Created at startup, otherwise unused.
pub const FOLDERS: TableDefinition<i64, &[u8]> = TableDefinition::new("folders");
