//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::todos;

/// Database row for a todo item.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_at: String,
}

/// Database row for a todo item (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = todos)]
pub struct NewTodoRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub created_at: String,
}

/// Editable columns of a todo item.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = todos)]
pub struct TodoChangeset<'a> {
    pub title: &'a str,
    pub description: &'a str,
}
