use crate::entities::{Customer, Item};
use crate::schema::reviews;

/// Join row between a customer and an item. Either side may be unset.
#[derive(Queryable, Identifiable, Associations, AsChangeset, Debug, Clone, PartialEq)]
#[belongs_to(Customer)]
#[belongs_to(Item)]
#[table_name = "reviews"]
#[changeset_options(treat_none_as_null = "true")]
pub struct Review {
    pub id: i32,
    pub comment: Option<String>,
    pub customer_id: Option<i32>,
    pub item_id: Option<i32>,
}

#[derive(Insertable, Debug, Clone, Default)]
#[table_name = "reviews"]
pub struct NewReview {
    pub comment: Option<String>,
    pub customer_id: Option<i32>,
    pub item_id: Option<i32>,
}

impl NewReview {
    pub fn new(comment: impl Into<String>, customer: &Customer, item: &Item) -> NewReview {
        NewReview {
            comment: Some(comment.into()),
            customer_id: Some(customer.id),
            item_id: Some(item.id),
        }
    }
}

impl Review {
    pub fn is_owned_by_customer(&self, customer: &Customer) -> bool {
        self.customer_id == Some(customer.id)
    }

    pub fn is_owned_by_item(&self, item: &Item) -> bool {
        self.item_id == Some(item.id)
    }
}
