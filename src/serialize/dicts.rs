use std::collections::HashSet;

use serde::Serialize;

use crate::entities::{Customer, Item, Review};
use crate::error::Result;
use crate::relations::Relations;
use crate::serialize::records::{CustomerRecord, ItemRecord, ReviewRecord};
use crate::settings::{Settings, MAX_DEPTH_LIMIT};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CustomerDict {
    pub id: i32,
    pub name: Option<String>,
    pub reviews: Vec<ReviewNode>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ItemDict {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub reviews: Vec<ReviewNode>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewDict {
    pub id: i32,
    pub comment: Option<String>,
    pub customer: Option<CustomerNode>,
    pub item: Option<ItemNode>,
}

/// A nested customer: expanded, or collapsed to its shallow record.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CustomerNode {
    Expanded(CustomerDict),
    Collapsed(CustomerRecord),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ItemNode {
    Expanded(ItemDict),
    Collapsed(ItemRecord),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ReviewNode {
    Expanded(ReviewDict),
    Collapsed(ReviewRecord),
}

impl CustomerNode {
    pub fn id(&self) -> i32 {
        match self {
            CustomerNode::Expanded(dict) => dict.id,
            CustomerNode::Collapsed(record) => record.id,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, CustomerNode::Expanded(_))
    }
}

impl ItemNode {
    pub fn id(&self) -> i32 {
        match self {
            ItemNode::Expanded(dict) => dict.id,
            ItemNode::Collapsed(record) => record.id,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, ItemNode::Expanded(_))
    }
}

impl ReviewNode {
    pub fn id(&self) -> i32 {
        match self {
            ReviewNode::Expanded(dict) => dict.id,
            ReviewNode::Collapsed(record) => record.id,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, ReviewNode::Expanded(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Visit {
    Customer(i32),
    Item(i32),
    Review(i32),
}

/// Walks the relationship graph for `to_dict`.
///
/// A row already open on the current path, or one more than `max_depth` levels
/// below the root, is emitted in its shallow form, so every walk terminates.
/// `max_depth` is clamped to [`MAX_DEPTH_LIMIT`].
pub struct DeepSerializer<'r, R: ?Sized> {
    relations: &'r R,
    max_depth: usize,
    path: HashSet<Visit>,
}

impl<'r, R> DeepSerializer<'r, R>
where
    R: Relations + ?Sized,
{
    pub fn new(relations: &'r R, max_depth: usize) -> Self {
        DeepSerializer {
            relations,
            max_depth: max_depth.min(MAX_DEPTH_LIMIT),
            path: HashSet::new(),
        }
    }

    pub fn from_settings(relations: &'r R, settings: &Settings) -> Self {
        Self::new(relations, settings.max_depth)
    }

    pub fn customer(&mut self, customer: &Customer) -> Result<CustomerDict> {
        self.expand_customer(customer, 0)
    }

    pub fn item(&mut self, item: &Item) -> Result<ItemDict> {
        self.expand_item(item, 0)
    }

    pub fn review(&mut self, review: &Review) -> Result<ReviewDict> {
        self.expand_review(review, 0)
    }

    fn collapses(&self, visit: Visit, depth: usize) -> bool {
        depth > self.max_depth || self.path.contains(&visit)
    }

    fn expand_customer(&mut self, customer: &Customer, depth: usize) -> Result<CustomerDict> {
        let visit = Visit::Customer(customer.id);
        self.path.insert(visit);

        let reviews = self.relations.reviews_of_customer(customer)?;
        let reviews = self.review_nodes(&reviews, depth + 1)?;

        self.path.remove(&visit);
        Ok(CustomerDict {
            id: customer.id,
            name: customer.name.clone(),
            reviews,
        })
    }

    fn expand_item(&mut self, item: &Item, depth: usize) -> Result<ItemDict> {
        let visit = Visit::Item(item.id);
        self.path.insert(visit);

        let reviews = self.relations.reviews_of_item(item)?;
        let reviews = self.review_nodes(&reviews, depth + 1)?;

        self.path.remove(&visit);
        Ok(ItemDict {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            reviews,
        })
    }

    fn expand_review(&mut self, review: &Review, depth: usize) -> Result<ReviewDict> {
        let visit = Visit::Review(review.id);
        self.path.insert(visit);

        let customer = match self.relations.customer_of(review)? {
            Some(customer) => Some(self.customer_node(&customer, depth + 1)?),
            None => None,
        };
        let item = match self.relations.item_of(review)? {
            Some(item) => Some(self.item_node(&item, depth + 1)?),
            None => None,
        };

        self.path.remove(&visit);
        Ok(ReviewDict {
            id: review.id,
            comment: review.comment.clone(),
            customer,
            item,
        })
    }

    fn review_nodes(&mut self, reviews: &[Review], depth: usize) -> Result<Vec<ReviewNode>> {
        reviews
            .iter()
            .map(|review| self.review_node(review, depth))
            .collect()
    }

    fn customer_node(&mut self, customer: &Customer, depth: usize) -> Result<CustomerNode> {
        if self.collapses(Visit::Customer(customer.id), depth) {
            return Ok(CustomerNode::Collapsed(customer.serialize(self.relations)?));
        }
        Ok(CustomerNode::Expanded(self.expand_customer(customer, depth)?))
    }

    fn item_node(&mut self, item: &Item, depth: usize) -> Result<ItemNode> {
        if self.collapses(Visit::Item(item.id), depth) {
            return Ok(ItemNode::Collapsed(item.serialize(self.relations)?));
        }
        Ok(ItemNode::Expanded(self.expand_item(item, depth)?))
    }

    fn review_node(&mut self, review: &Review, depth: usize) -> Result<ReviewNode> {
        if self.collapses(Visit::Review(review.id), depth) {
            return Ok(ReviewNode::Collapsed(review.serialize()));
        }
        Ok(ReviewNode::Expanded(self.expand_review(review, depth)?))
    }
}

impl Customer {
    pub fn to_dict<R>(&self, relations: &R, max_depth: usize) -> Result<CustomerDict>
    where
        R: Relations + ?Sized,
    {
        DeepSerializer::new(relations, max_depth).customer(self)
    }

    /// `to_dict` with the configured `max_depth`.
    pub fn to_dict_with<R>(&self, relations: &R, settings: &Settings) -> Result<CustomerDict>
    where
        R: Relations + ?Sized,
    {
        DeepSerializer::from_settings(relations, settings).customer(self)
    }
}

impl Item {
    pub fn to_dict<R>(&self, relations: &R, max_depth: usize) -> Result<ItemDict>
    where
        R: Relations + ?Sized,
    {
        DeepSerializer::new(relations, max_depth).item(self)
    }

    /// `to_dict` with the configured `max_depth`.
    pub fn to_dict_with<R>(&self, relations: &R, settings: &Settings) -> Result<ItemDict>
    where
        R: Relations + ?Sized,
    {
        DeepSerializer::from_settings(relations, settings).item(self)
    }
}

impl Review {
    pub fn to_dict<R>(&self, relations: &R, max_depth: usize) -> Result<ReviewDict>
    where
        R: Relations + ?Sized,
    {
        DeepSerializer::new(relations, max_depth).review(self)
    }

    /// `to_dict` with the configured `max_depth`.
    pub fn to_dict_with<R>(&self, relations: &R, settings: &Settings) -> Result<ReviewDict>
    where
        R: Relations + ?Sized,
    {
        DeepSerializer::from_settings(relations, settings).review(self)
    }
}
