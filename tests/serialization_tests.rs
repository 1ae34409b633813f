mod common;

use common::{memory_db, seed_scenario};
use review_store::serialize::{ItemNode, ReviewNode};
use review_store::settings::DEFAULT_MAX_DEPTH;
use review_store::{NewCustomer, NewReview, Store};
use serde_json::json;

#[test]
fn customer_serialize_lists_own_reviews_as_keys() {
    let conn = memory_db();
    let store = Store::new(&conn);
    let s = seed_scenario(&store);

    let record = serde_json::to_value(s.ann.serialize(&store).unwrap()).unwrap();

    assert_eq!(
        record,
        json!({
            "id": s.ann.id,
            "name": "Ann",
            "reviews": [{
                "id": s.review.id,
                "comment": "great",
                "customer_id": s.ann.id,
                "item_id": s.widget.id
            }]
        })
    );
}

#[test]
fn item_serialize_omits_price() {
    let conn = memory_db();
    let store = Store::new(&conn);
    let s = seed_scenario(&store);
    let bob = store.create_customer(&NewCustomer::named("Bob")).unwrap();
    let second = store
        .create_review(&NewReview::new("fine", &bob, &s.widget))
        .unwrap();

    let record = s.widget.serialize(&store).unwrap();
    let value = serde_json::to_value(&record).unwrap();

    assert!(value.get("price").is_none());
    let ids: Vec<i32> = record.reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![s.review.id, second.id]);
}

#[test]
fn item_to_dict_expands_then_collapses_the_cycle() {
    let conn = memory_db();
    let store = Store::new(&conn);
    let s = seed_scenario(&store);

    let dict = serde_json::to_value(s.widget.to_dict(&store, DEFAULT_MAX_DEPTH).unwrap()).unwrap();

    let shallow_review = json!({
        "id": s.review.id,
        "comment": "great",
        "customer_id": s.ann.id,
        "item_id": s.widget.id
    });
    assert_eq!(
        dict,
        json!({
            "id": s.widget.id,
            "name": "Widget",
            "price": 9.99,
            "reviews": [{
                "id": s.review.id,
                "comment": "great",
                "customer": {"id": s.ann.id, "name": "Ann", "reviews": [shallow_review]},
                "item": {"id": s.widget.id, "name": "Widget", "reviews": [shallow_review]}
            }]
        })
    );
}

#[test]
fn customer_to_dict_reaches_items_through_reviews() {
    let conn = memory_db();
    let store = Store::new(&conn);
    let s = seed_scenario(&store);

    let dict = s.ann.to_dict(&store, DEFAULT_MAX_DEPTH).unwrap();

    let review = match &dict.reviews[0] {
        ReviewNode::Expanded(review) => review,
        ReviewNode::Collapsed(_) => panic!("first level review should be expanded"),
    };
    let widget = match review.item.as_ref() {
        Some(ItemNode::Expanded(item)) => item,
        other => panic!("expected expanded item, got {:?}", other),
    };
    assert_eq!(widget.price, Some(9.99));
    assert!(!review.customer.as_ref().unwrap().is_expanded());
}

#[test]
fn review_to_dict_after_customer_delete_has_null_customer() {
    let conn = memory_db();
    let store = Store::new(&conn);
    let s = seed_scenario(&store);

    store.delete_customer(s.ann.id).unwrap();
    let orphan = store.review(s.review.id).unwrap().unwrap();
    let dict = orphan.to_dict(&store, DEFAULT_MAX_DEPTH).unwrap();

    assert!(dict.customer.is_none());
    assert_eq!(dict.item.map(|item| item.id()), Some(s.widget.id));
}

#[test]
fn snapshot_and_store_serialize_alike() {
    let conn = memory_db();
    let store = Store::new(&conn);
    let s = seed_scenario(&store);
    let graph = store.snapshot().unwrap();

    assert_eq!(
        s.ann.to_dict(&graph, DEFAULT_MAX_DEPTH).unwrap(),
        s.ann.to_dict(&store, DEFAULT_MAX_DEPTH).unwrap()
    );
    assert_eq!(
        s.widget.serialize(&graph).unwrap(),
        s.widget.serialize(&store).unwrap()
    );
}
