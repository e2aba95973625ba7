//! Various unsorted geometrical operators.

pub use self::as_point::AsPoint;
pub use self::center::center;

mod as_point;
mod center;
