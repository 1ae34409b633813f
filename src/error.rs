use std::fmt;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The three persisted record types, used to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Customer,
    Item,
    Review,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Entity::Customer => "customer",
            Entity::Item => "item",
            Entity::Review => "review",
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("couldn't connect to database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: i32 },
    #[error("reference to missing {entity} {id}")]
    DanglingReference { entity: Entity, id: i32 },
    #[error("row id {0} does not fit a 32-bit key")]
    RowIdOutOfRange(i64),
}

impl Error {
    pub(crate) fn not_found(entity: Entity, id: i32) -> Error {
        Error::NotFound { entity, id }
    }

    pub(crate) fn dangling(entity: Entity, id: i32) -> Error {
        Error::DanglingReference { entity, id }
    }
}
