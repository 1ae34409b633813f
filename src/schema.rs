table! {
    customers (id) {
        id -> Integer,
        name -> Nullable<Text>,
    }
}

table! {
    items (id) {
        id -> Integer,
        name -> Nullable<Text>,
        price -> Nullable<Double>,
    }
}

table! {
    reviews (id) {
        id -> Integer,
        comment -> Nullable<Text>,
        customer_id -> Nullable<Integer>,
        item_id -> Nullable<Integer>,
    }
}

joinable!(reviews -> customers (customer_id));
joinable!(reviews -> items (item_id));

allow_tables_to_appear_in_same_query!(
    customers,
    items,
    reviews,
);
