use rusqlite::Connection;

/// Fresh in-memory catalog holding the three stock boxes
pub fn setup_catalog() -> Connection {
    cartonx_store::db::open_catalog_in_memory().expect("Failed to create in-memory catalog")
}

#[allow(dead_code)]
pub fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}
