//! Migrations compiled into the binary with include_str!

pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All embedded migrations, in application order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_box_catalog",
            sql: include_str!("../../migrations/001_box_catalog.sql"),
        },
        Migration {
            id: "002_item_catalog",
            sql: include_str!("../../migrations/002_item_catalog.sql"),
        },
    ]
}
