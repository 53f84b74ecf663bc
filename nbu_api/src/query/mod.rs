mod common;
pub use self::common::Query;

mod exchange;
pub use self::exchange::{ExchangeQuery, REQUEST_DATE_FORMAT};
