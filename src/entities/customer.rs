use std::fmt;

use crate::entities::OrNone;
use crate::schema::customers;

#[derive(Queryable, Identifiable, AsChangeset, Debug, Clone, PartialEq)]
#[table_name = "customers"]
#[changeset_options(treat_none_as_null = "true")]
pub struct Customer {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Insertable, Debug, Clone, Default)]
#[table_name = "customers"]
pub struct NewCustomer {
    pub name: Option<String>,
}

impl NewCustomer {
    pub fn named(name: impl Into<String>) -> NewCustomer {
        NewCustomer {
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Customer {}, {}>", self.id, OrNone(&self.name))
    }
}
