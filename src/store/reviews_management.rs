use diesel::prelude::*;
use tracing::{debug, info};

use crate::entities::{NewReview, Review};
use crate::error::{Entity, Error, Result};
use crate::schema::reviews;
use crate::store::Store;

impl Store<'_> {
    /// Inserts a review. Keys pointing at missing rows are rejected by the database.
    pub fn create_review(&self, new_review: &NewReview) -> Result<Review> {
        let conn = self.conn;

        let review = conn.transaction::<_, Error, _>(|| {
            diesel::insert_into(reviews::table)
                .values(new_review)
                .execute(conn)?;
            let id = self.last_insert_id()?;

            Ok(reviews::table.find(id).first::<Review>(conn)?)
        })?;

        info!(
            review_id = review.id,
            customer_id = ?review.customer_id,
            item_id = ?review.item_id,
            "created review"
        );
        Ok(review)
    }

    pub fn review(&self, id: i32) -> Result<Option<Review>> {
        debug!(review_id = id, "loading review");
        Ok(reviews::table
            .find(id)
            .first::<Review>(self.conn)
            .optional()?)
    }

    pub fn reviews(&self) -> Result<Vec<Review>> {
        Ok(reviews::table
            .order(reviews::id)
            .load::<Review>(self.conn)?)
    }

    /// Writes the review back, including re-pointed or cleared keys.
    pub fn update_review(&self, review: &Review) -> Result<()> {
        let updated = diesel::update(review).set(review).execute(self.conn)?;
        if updated == 0 {
            return Err(Error::not_found(Entity::Review, review.id));
        }

        info!(review_id = review.id, "updated review");
        Ok(())
    }

    pub fn delete_review(&self, id: i32) -> Result<()> {
        let deleted = diesel::delete(reviews::table.find(id)).execute(self.conn)?;
        if deleted == 0 {
            return Err(Error::not_found(Entity::Review, id));
        }

        info!(review_id = id, "deleted review");
        Ok(())
    }
}
