use std::fmt;

use crate::entities::OrNone;
use crate::schema::items;

#[derive(Queryable, Identifiable, AsChangeset, Debug, Clone, PartialEq)]
#[table_name = "items"]
#[changeset_options(treat_none_as_null = "true")]
pub struct Item {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Insertable, Debug, Clone, Default)]
#[table_name = "items"]
pub struct NewItem {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: f64) -> NewItem {
        NewItem {
            name: Some(name.into()),
            price: Some(price),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Item {}, {}, {}>",
            self.id,
            OrNone(&self.name),
            OrNone(&self.price)
        )
    }
}
