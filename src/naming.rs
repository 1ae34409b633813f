//! Constraint naming and table DDL.
//!
//! Every foreign key in the schema is named `fk_<table>_<column>_<referenced_table>`.
//! The DDL below is rendered from [`TABLES`] so the convention is applied in one place.

/// Name of the foreign-key constraint on `table.column` referencing `referred_table`.
pub fn fk_constraint_name(table: &str, column: &str, referred_table: &str) -> String {
    format!("fk_{}_{}_{}", table, column, referred_table)
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub primary_key: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ForeignKey {
    pub column: &'static str,
    pub referred_table: &'static str,
    pub referred_column: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub foreign_keys: &'static [ForeignKey],
}

const fn pk(name: &'static str) -> Column {
    Column {
        name,
        sql_type: "INTEGER",
        primary_key: true,
    }
}

const fn col(name: &'static str, sql_type: &'static str) -> Column {
    Column {
        name,
        sql_type,
        primary_key: false,
    }
}

/// Tables in creation order; referenced tables come first.
pub const TABLES: &[Table] = &[
    Table {
        name: "customers",
        columns: &[pk("id"), col("name", "TEXT")],
        foreign_keys: &[],
    },
    Table {
        name: "items",
        columns: &[pk("id"), col("name", "TEXT"), col("price", "REAL")],
        foreign_keys: &[],
    },
    Table {
        name: "reviews",
        columns: &[
            pk("id"),
            col("comment", "TEXT"),
            col("customer_id", "INTEGER"),
            col("item_id", "INTEGER"),
        ],
        foreign_keys: &[
            ForeignKey {
                column: "customer_id",
                referred_table: "customers",
                referred_column: "id",
            },
            ForeignKey {
                column: "item_id",
                referred_table: "items",
                referred_column: "id",
            },
        ],
    },
];

impl Table {
    pub fn create_statement(&self) -> String {
        let mut definitions: Vec<String> = self
            .columns
            .iter()
            .map(|column| {
                if column.primary_key {
                    format!("{} {} PRIMARY KEY NOT NULL", column.name, column.sql_type)
                } else {
                    format!("{} {}", column.name, column.sql_type)
                }
            })
            .collect();

        definitions.extend(self.foreign_keys.iter().map(|fk| {
            format!(
                "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
                fk_constraint_name(self.name, fk.column, fk.referred_table),
                fk.column,
                fk.referred_table,
                fk.referred_column
            )
        }));

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.name,
            definitions.join(",\n    ")
        )
    }

    pub fn constraint_names(&self) -> Vec<String> {
        self.foreign_keys
            .iter()
            .map(|fk| fk_constraint_name(self.name, fk.column, fk.referred_table))
            .collect()
    }
}

/// The whole schema as one batch of statements.
pub fn schema_sql() -> String {
    TABLES.iter().fold(String::new(), |mut sql, table| {
        sql.push_str(&table.create_statement());
        sql.push_str(";\n");
        sql
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fk_names_follow_convention() {
        assert_eq!(
            fk_constraint_name("reviews", "customer_id", "customers"),
            "fk_reviews_customer_id_customers"
        );
    }

    #[test]
    fn reviews_table_names_both_constraints() {
        let reviews = TABLES.iter().find(|t| t.name == "reviews").unwrap();

        assert_eq!(
            reviews.constraint_names(),
            vec![
                "fk_reviews_customer_id_customers".to_string(),
                "fk_reviews_item_id_items".to_string(),
            ]
        );
        let sql = reviews.create_statement();
        assert!(sql.contains(
            "CONSTRAINT fk_reviews_item_id_items FOREIGN KEY (item_id) REFERENCES items (id)"
        ));
    }

    #[test]
    fn every_statement_is_terminated() {
        let sql = schema_sql();

        assert_eq!(sql.matches(";\n").count(), TABLES.len());
        assert!(sql.ends_with(");\n"));
    }

    #[test]
    fn referenced_tables_are_created_first() {
        let sql = schema_sql();
        let customers = sql.find("CREATE TABLE IF NOT EXISTS customers").unwrap();
        let items = sql.find("CREATE TABLE IF NOT EXISTS items").unwrap();
        let reviews = sql.find("CREATE TABLE IF NOT EXISTS reviews").unwrap();

        assert!(customers < reviews && items < reviews);
    }
}
