#[macro_use]
extern crate diesel;

pub mod db;
pub mod entities;
pub mod error;
pub mod graph;
pub mod logging;
pub mod naming;
pub mod relations;
pub mod schema;
pub mod serialize;
pub mod settings;
pub mod store;

pub use entities::{Customer, Item, NewCustomer, NewItem, NewReview, Review};
pub use error::{Entity, Error, Result};
pub use graph::Graph;
pub use relations::Relations;
pub use settings::Settings;
pub use store::Store;
