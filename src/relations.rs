use crate::entities::{Customer, Item, Review};
use crate::error::Result;

/// Navigation across the Customer ↔ Review ↔ Item relationship pairs.
///
/// Collections come back in insertion order (ascending review id).
pub trait Relations {
    fn find_customer(&self, id: i32) -> Result<Option<Customer>>;

    fn find_item(&self, id: i32) -> Result<Option<Item>>;

    /// `customer.reviews`
    fn reviews_of_customer(&self, customer: &Customer) -> Result<Vec<Review>>;

    /// `item.reviews`
    fn reviews_of_item(&self, item: &Item) -> Result<Vec<Review>>;

    /// `review.customer`; absent when the key is null or the row is gone.
    fn customer_of(&self, review: &Review) -> Result<Option<Customer>> {
        match review.customer_id {
            Some(id) => self.find_customer(id),
            None => Ok(None),
        }
    }

    /// `review.item`
    fn item_of(&self, review: &Review) -> Result<Option<Item>> {
        match review.item_id {
            Some(id) => self.find_item(id),
            None => Ok(None),
        }
    }

    /// `customer.items`: `review.item` for every review of the customer.
    ///
    /// Keeps review order and duplicates; a review without an item yields `None`.
    fn items_of_customer(&self, customer: &Customer) -> Result<Vec<Option<Item>>> {
        self.reviews_of_customer(customer)?
            .iter()
            .map(|review| self.item_of(review))
            .collect()
    }
}
