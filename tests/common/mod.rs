#![allow(dead_code)]

use diesel::sqlite::SqliteConnection;
use review_store::{db, Customer, Item, NewCustomer, NewItem, NewReview, Review, Store};

/// Fresh in-memory database with the schema and foreign keys enabled.
pub fn memory_db() -> SqliteConnection {
    let conn = db::connect(":memory:").expect("in-memory database");
    db::create_schema(&conn).expect("schema");
    conn
}

pub struct Scenario {
    pub ann: Customer,
    pub widget: Item,
    pub review: Review,
}

/// Ann reviewed the Widget: "great".
pub fn seed_scenario(store: &Store<'_>) -> Scenario {
    let ann = store.create_customer(&NewCustomer::named("Ann")).unwrap();
    let widget = store.create_item(&NewItem::new("Widget", 9.99)).unwrap();
    let review = store
        .create_review(&NewReview::new("great", &ann, &widget))
        .unwrap();

    Scenario {
        ann,
        widget,
        review,
    }
}
