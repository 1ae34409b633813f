pub use self::customer::*;
pub use self::item::*;
pub use self::review::*;

mod customer;
mod item;
mod review;

/// Renders a nullable column the way the row's text form shows it.
pub(crate) struct OrNone<'a, T>(pub(crate) &'a Option<T>);

impl<T: std::fmt::Display> std::fmt::Display for OrNone<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("None"),
        }
    }
}
