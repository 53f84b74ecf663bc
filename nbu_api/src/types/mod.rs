mod rate;
pub use self::rate::{is_currency_code, RateEntry, RateTable};
