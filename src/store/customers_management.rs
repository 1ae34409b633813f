use diesel::prelude::*;
use tracing::{info, warn};

use crate::entities::{Customer, NewCustomer};
use crate::error::{Entity, Error, Result};
use crate::schema::{customers, reviews};
use crate::store::Store;

impl Store<'_> {
    pub fn create_customer(&self, new_customer: &NewCustomer) -> Result<Customer> {
        let conn = self.conn;

        let customer = conn.transaction::<_, Error, _>(|| {
            diesel::insert_into(customers::table)
                .values(new_customer)
                .execute(conn)?;
            let id = self.last_insert_id()?;

            Ok(customers::table.find(id).first::<Customer>(conn)?)
        })?;

        info!(customer_id = customer.id, "created customer");
        Ok(customer)
    }

    pub fn customers(&self) -> Result<Vec<Customer>> {
        Ok(customers::table
            .order(customers::id)
            .load::<Customer>(self.conn)?)
    }

    pub fn update_customer(&self, customer: &Customer) -> Result<()> {
        let updated = diesel::update(customer).set(customer).execute(self.conn)?;
        if updated == 0 {
            return Err(Error::not_found(Entity::Customer, customer.id));
        }

        info!(customer_id = customer.id, "updated customer");
        Ok(())
    }

    /// Deletes the customer; its reviews stay, with `customer_id` cleared.
    pub fn delete_customer(&self, id: i32) -> Result<()> {
        let conn = self.conn;

        let orphaned = conn.transaction::<_, Error, _>(|| {
            let orphaned = diesel::update(reviews::table.filter(reviews::customer_id.eq(id)))
                .set(reviews::customer_id.eq(None::<i32>))
                .execute(conn)?;

            let deleted = diesel::delete(customers::table.find(id)).execute(conn)?;
            if deleted == 0 {
                return Err(Error::not_found(Entity::Customer, id));
            }

            Ok(orphaned)
        })?;

        if orphaned > 0 {
            warn!(customer_id = id, orphaned, "deleted customer left reviews without customer");
        }
        info!(customer_id = id, "deleted customer");
        Ok(())
    }
}
