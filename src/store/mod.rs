use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use crate::entities::{Customer, Item, Review};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::relations::Relations;
use crate::schema::{customers, items, reviews};

mod customers_management;
mod items_management;
mod reviews_management;

no_arg_sql_function!(last_insert_rowid, diesel::sql_types::BigInt);

/// Row access over one borrowed connection.
pub struct Store<'a> {
    conn: &'a SqliteConnection,
}

impl<'a> Store<'a> {
    pub fn new(conn: &'a SqliteConnection) -> Store<'a> {
        Store { conn }
    }

    pub fn connection(&self) -> &'a SqliteConnection {
        self.conn
    }

    /// Loads every row into an in-memory graph.
    pub fn snapshot(&self) -> Result<Graph> {
        Graph::load(self)
    }

    fn last_insert_id(&self) -> Result<i32> {
        let rowid = diesel::select(last_insert_rowid).get_result::<i64>(self.conn)?;
        i32::try_from(rowid).map_err(|_| Error::RowIdOutOfRange(rowid))
    }
}

impl Relations for Store<'_> {
    fn find_customer(&self, id: i32) -> Result<Option<Customer>> {
        debug!(customer_id = id, "loading customer");
        Ok(customers::table
            .find(id)
            .first::<Customer>(self.conn)
            .optional()?)
    }

    fn find_item(&self, id: i32) -> Result<Option<Item>> {
        debug!(item_id = id, "loading item");
        Ok(items::table.find(id).first::<Item>(self.conn).optional()?)
    }

    fn reviews_of_customer(&self, customer: &Customer) -> Result<Vec<Review>> {
        debug!(customer_id = customer.id, "loading customer reviews");
        Ok(Review::belonging_to(customer)
            .order(reviews::id)
            .load::<Review>(self.conn)?)
    }

    fn reviews_of_item(&self, item: &Item) -> Result<Vec<Review>> {
        debug!(item_id = item.id, "loading item reviews");
        Ok(Review::belonging_to(item)
            .order(reviews::id)
            .load::<Review>(self.conn)?)
    }
}
