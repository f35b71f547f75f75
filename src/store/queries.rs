//! SQL text for the `pet` table. Identifiers come from validated settings only; values are always bound.

/// Quote identifier for PostgreSQL.
pub(super) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

pub const TABLE_NAME: &str = "pet";

const COLUMNS: &str = "\"id\", \"name\", \"category\", \"status\"";

/// Statements for one schema-qualified `pet` table, built once per store.
#[derive(Clone, Debug)]
pub struct PetQueries {
    /// `None` for `public`, which always exists.
    pub create_schema: Option<String>,
    pub create_table: String,
    pub insert: String,
    pub select_all: String,
    pub select_by_id: String,
    pub select_by_status: String,
    pub update: String,
    pub delete: String,
}

impl PetQueries {
    pub fn new(schema: &str) -> Self {
        let table = qualified_table(schema, TABLE_NAME);
        let create_schema = (schema != "public").then(|| format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)));
        // Columns stay nullable; presence is checked before insert.
        let create_table = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                "id" SERIAL PRIMARY KEY,
                "name" VARCHAR(50),
                "category" VARCHAR(50),
                "status" VARCHAR(20)
            )
            "#,
            table
        );
        PetQueries {
            create_schema,
            create_table,
            insert: format!(
                "INSERT INTO {} (\"name\", \"category\", \"status\") VALUES ($1, $2, $3) RETURNING {}",
                table, COLUMNS
            ),
            select_all: format!("SELECT {} FROM {} ORDER BY \"id\"", COLUMNS, table),
            select_by_id: format!("SELECT {} FROM {} WHERE \"id\" = $1", COLUMNS, table),
            select_by_status: format!("SELECT {} FROM {} WHERE \"status\" = $1 ORDER BY \"id\"", COLUMNS, table),
            update: format!(
                "UPDATE {} SET \"name\" = COALESCE($1, \"name\"), \"category\" = COALESCE($2, \"category\"), \"status\" = COALESCE($3, \"status\") WHERE \"id\" = $4 RETURNING {}",
                table, COLUMNS
            ),
            delete: format!("DELETE FROM {} WHERE \"id\" = $1 RETURNING \"id\"", table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_schema_needs_no_create_schema() {
        let q = PetQueries::new("public");
        assert!(q.create_schema.is_none());
        assert!(q.create_table.contains("CREATE TABLE IF NOT EXISTS \"public\".\"pet\""));
    }

    #[test]
    fn custom_schema_is_created_and_qualifies_every_statement() {
        let q = PetQueries::new("petstore");
        assert_eq!(q.create_schema.as_deref(), Some("CREATE SCHEMA IF NOT EXISTS \"petstore\""));
        for sql in [&q.insert, &q.select_all, &q.select_by_id, &q.select_by_status, &q.update, &q.delete] {
            assert!(sql.contains("\"petstore\".\"pet\""), "{sql}");
        }
    }

    #[test]
    fn column_widths_follow_the_table_definition() {
        let q = PetQueries::new("public");
        assert!(q.create_table.contains("\"name\" VARCHAR(50)"));
        assert!(q.create_table.contains("\"category\" VARCHAR(50)"));
        assert!(q.create_table.contains("\"status\" VARCHAR(20)"));
    }

    #[test]
    fn update_keeps_columns_bound_to_null() {
        let q = PetQueries::new("public");
        assert!(q.update.contains("\"status\" = COALESCE($3, \"status\")"));
        assert!(q.update.ends_with("RETURNING \"id\", \"name\", \"category\", \"status\""));
    }

    #[test]
    fn quoting_escapes_embedded_quotes() {
        assert_eq!(quoted("a\"b"), "\"a\"\"b\"");
    }
}
