use diesel::prelude::*;
use tracing::{info, warn};

use crate::entities::{Item, NewItem};
use crate::error::{Entity, Error, Result};
use crate::schema::{items, reviews};
use crate::store::Store;

impl Store<'_> {
    pub fn create_item(&self, new_item: &NewItem) -> Result<Item> {
        let conn = self.conn;

        let item = conn.transaction::<_, Error, _>(|| {
            diesel::insert_into(items::table)
                .values(new_item)
                .execute(conn)?;
            let id = self.last_insert_id()?;

            Ok(items::table.find(id).first::<Item>(conn)?)
        })?;

        info!(item_id = item.id, "created item");
        Ok(item)
    }

    pub fn items(&self) -> Result<Vec<Item>> {
        Ok(items::table.order(items::id).load::<Item>(self.conn)?)
    }

    pub fn update_item(&self, item: &Item) -> Result<()> {
        let updated = diesel::update(item).set(item).execute(self.conn)?;
        if updated == 0 {
            return Err(Error::not_found(Entity::Item, item.id));
        }

        info!(item_id = item.id, "updated item");
        Ok(())
    }

    /// Deletes the item; its reviews stay, with `item_id` cleared.
    pub fn delete_item(&self, id: i32) -> Result<()> {
        let conn = self.conn;

        let orphaned = conn.transaction::<_, Error, _>(|| {
            let orphaned = diesel::update(reviews::table.filter(reviews::item_id.eq(id)))
                .set(reviews::item_id.eq(None::<i32>))
                .execute(conn)?;

            let deleted = diesel::delete(items::table.find(id)).execute(conn)?;
            if deleted == 0 {
                return Err(Error::not_found(Entity::Item, id));
            }

            Ok(orphaned)
        })?;

        if orphaned > 0 {
            warn!(item_id = id, orphaned, "deleted item left reviews without item");
        }
        info!(item_id = id, "deleted item");
        Ok(())
    }
}
