//! In-memory snapshot of the relationship graph.
//!
//! Rows are keyed by id; each customer and item keeps the ids of its reviews,
//! kept in step with the review's foreign keys on every insert and removal.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::entities::{Customer, Item, Review};
use crate::error::{Entity, Error, Result};
use crate::relations::Relations;
use crate::store::Store;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    customers: BTreeMap<i32, Customer>,
    items: BTreeMap<i32, Item>,
    reviews: BTreeMap<i32, Review>,
    customer_reviews: HashMap<i32, Vec<i32>>,
    item_reviews: HashMap<i32, Vec<i32>>,
}

fn link(index: &mut HashMap<i32, Vec<i32>>, owner: i32, review_id: i32) {
    let ids = index.entry(owner).or_default();
    if let Err(pos) = ids.binary_search(&review_id) {
        ids.insert(pos, review_id);
    }
}

fn unlink(index: &mut HashMap<i32, Vec<i32>>, owner: i32, review_id: i32) {
    if let Some(ids) = index.get_mut(&owner) {
        ids.retain(|id| *id != review_id);
    }
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Loads customers and items first so every review key resolves.
    pub fn load(source: &Store<'_>) -> Result<Graph> {
        let mut graph = Graph::new();
        for customer in source.customers()? {
            graph.insert_customer(customer);
        }
        for item in source.items()? {
            graph.insert_item(item);
        }
        for review in source.reviews()? {
            graph.insert_review(review)?;
        }

        debug!(
            customers = graph.customers.len(),
            items = graph.items.len(),
            reviews = graph.reviews.len(),
            "loaded graph"
        );
        Ok(graph)
    }

    /// Inserts or replaces a customer.
    pub fn insert_customer(&mut self, customer: Customer) {
        self.customers.insert(customer.id, customer);
    }

    /// Inserts or replaces an item.
    pub fn insert_item(&mut self, item: Item) {
        self.items.insert(item.id, item);
    }

    /// Inserts or replaces a review and moves it between the owners' collections.
    pub fn insert_review(&mut self, review: Review) -> Result<()> {
        if let Some(id) = review.customer_id {
            if !self.customers.contains_key(&id) {
                return Err(Error::dangling(Entity::Customer, id));
            }
        }
        if let Some(id) = review.item_id {
            if !self.items.contains_key(&id) {
                return Err(Error::dangling(Entity::Item, id));
            }
        }

        self.detach_review(review.id);
        if let Some(id) = review.customer_id {
            link(&mut self.customer_reviews, id, review.id);
        }
        if let Some(id) = review.item_id {
            link(&mut self.item_reviews, id, review.id);
        }
        self.reviews.insert(review.id, review);
        Ok(())
    }

    /// Removes a customer; its reviews stay with `customer_id` cleared.
    pub fn remove_customer(&mut self, id: i32) -> Option<Customer> {
        let customer = self.customers.remove(&id)?;
        for review_id in self.customer_reviews.remove(&id).unwrap_or_default() {
            if let Some(review) = self.reviews.get_mut(&review_id) {
                review.customer_id = None;
            }
        }
        Some(customer)
    }

    /// Removes an item; its reviews stay with `item_id` cleared.
    pub fn remove_item(&mut self, id: i32) -> Option<Item> {
        let item = self.items.remove(&id)?;
        for review_id in self.item_reviews.remove(&id).unwrap_or_default() {
            if let Some(review) = self.reviews.get_mut(&review_id) {
                review.item_id = None;
            }
        }
        Some(item)
    }

    pub fn remove_review(&mut self, id: i32) -> Option<Review> {
        self.detach_review(id);
        self.reviews.remove(&id)
    }

    fn detach_review(&mut self, id: i32) {
        if let Some(old) = self.reviews.get(&id) {
            if let Some(owner) = old.customer_id {
                unlink(&mut self.customer_reviews, owner, id);
            }
            if let Some(owner) = old.item_id {
                unlink(&mut self.item_reviews, owner, id);
            }
        }
    }

    pub fn customer(&self, id: i32) -> Option<&Customer> {
        self.customers.get(&id)
    }

    pub fn item(&self, id: i32) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn review(&self, id: i32) -> Option<&Review> {
        self.reviews.get(&id)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn reviews(&self) -> impl Iterator<Item = &Review> {
        self.reviews.values()
    }

    fn collect_reviews(&self, index: &HashMap<i32, Vec<i32>>, owner: i32) -> Vec<Review> {
        index
            .get(&owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.reviews.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Relations for Graph {
    fn find_customer(&self, id: i32) -> Result<Option<Customer>> {
        Ok(self.customers.get(&id).cloned())
    }

    fn find_item(&self, id: i32) -> Result<Option<Item>> {
        Ok(self.items.get(&id).cloned())
    }

    fn reviews_of_customer(&self, customer: &Customer) -> Result<Vec<Review>> {
        Ok(self.collect_reviews(&self.customer_reviews, customer.id))
    }

    fn reviews_of_item(&self, item: &Item) -> Result<Vec<Review>> {
        Ok(self.collect_reviews(&self.item_reviews, item.id))
    }
}
