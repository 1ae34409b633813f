use serde::Serialize;

use crate::entities::{Customer, Item, Review};
use crate::error::Result;
use crate::relations::Relations;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub id: i32,
    pub comment: Option<String>,
    pub customer_id: Option<i32>,
    pub item_id: Option<i32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub id: i32,
    pub name: Option<String>,
    pub reviews: Vec<ReviewRecord>,
}

/// Shallow item form; price is not part of it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub id: i32,
    pub name: Option<String>,
    pub reviews: Vec<ReviewRecord>,
}

impl From<&Review> for ReviewRecord {
    fn from(review: &Review) -> Self {
        ReviewRecord {
            id: review.id,
            comment: review.comment.clone(),
            customer_id: review.customer_id,
            item_id: review.item_id,
        }
    }
}

impl Review {
    pub fn serialize(&self) -> ReviewRecord {
        ReviewRecord::from(self)
    }
}

impl Customer {
    /// Reviews whose `customer_id` is this customer, as foreign keys.
    pub fn serialize<R>(&self, relations: &R) -> Result<CustomerRecord>
    where
        R: Relations + ?Sized,
    {
        let reviews = relations
            .reviews_of_customer(self)?
            .iter()
            .filter(|review| review.is_owned_by_customer(self))
            .map(ReviewRecord::from)
            .collect();

        Ok(CustomerRecord {
            id: self.id,
            name: self.name.clone(),
            reviews,
        })
    }
}

impl Item {
    /// Reviews whose `item_id` is this item, as foreign keys.
    pub fn serialize<R>(&self, relations: &R) -> Result<ItemRecord>
    where
        R: Relations + ?Sized,
    {
        let reviews = relations
            .reviews_of_item(self)?
            .iter()
            .filter(|review| review.is_owned_by_item(self))
            .map(ReviewRecord::from)
            .collect();

        Ok(ItemRecord {
            id: self.id,
            name: self.name.clone(),
            reviews,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use serde_json::json;

    struct Unfiltered {
        reviews: Vec<Review>,
    }

    /// Hands back every review regardless of owner.
    impl Relations for Unfiltered {
        fn find_customer(&self, _id: i32) -> Result<Option<Customer>> {
            Ok(None)
        }

        fn find_item(&self, _id: i32) -> Result<Option<Item>> {
            Ok(None)
        }

        fn reviews_of_customer(&self, _customer: &Customer) -> Result<Vec<Review>> {
            Ok(self.reviews.clone())
        }

        fn reviews_of_item(&self, _item: &Item) -> Result<Vec<Review>> {
            Ok(self.reviews.clone())
        }
    }

    fn review(id: i32, customer_id: Option<i32>, item_id: Option<i32>) -> Review {
        Review {
            id,
            comment: Some("great".to_string()),
            customer_id,
            item_id,
        }
    }

    #[test]
    fn customer_record_matches_scenario() {
        let mut graph = Graph::new();
        let ann = Customer {
            id: 1,
            name: Some("Ann".to_string()),
        };
        graph.insert_customer(ann.clone());
        graph.insert_item(Item {
            id: 5,
            name: Some("Widget".to_string()),
            price: Some(9.99),
        });
        graph.insert_review(review(10, Some(1), Some(5))).unwrap();

        let record = serde_json::to_value(ann.serialize(&graph).unwrap()).unwrap();

        assert_eq!(
            record,
            json!({
                "id": 1,
                "name": "Ann",
                "reviews": [{"id": 10, "comment": "great", "customer_id": 1, "item_id": 5}]
            })
        );
    }

    #[test]
    fn item_record_omits_price() {
        let widget = Item {
            id: 5,
            name: None,
            price: Some(9.99),
        };

        let record = serde_json::to_value(widget.serialize(&Graph::new()).unwrap()).unwrap();

        assert_eq!(record, json!({"id": 5, "name": null, "reviews": []}));
    }

    #[test]
    fn foreign_reviews_are_filtered_out() {
        let ann = Customer { id: 1, name: None };
        let widget = Item {
            id: 5,
            name: None,
            price: None,
        };
        let relations = Unfiltered {
            reviews: vec![
                review(10, Some(1), Some(5)),
                review(11, Some(2), Some(6)),
                review(12, None, Some(5)),
            ],
        };

        let customer_ids: Vec<i32> = ann
            .serialize(&relations)
            .unwrap()
            .reviews
            .iter()
            .map(|r| r.id)
            .collect();
        let item_ids: Vec<i32> = widget
            .serialize(&relations)
            .unwrap()
            .reviews
            .iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(customer_ids, vec![10]);
        assert_eq!(item_ids, vec![10, 12]);
    }
}
