//! Points configuration constants
//!
//! Defines the point values awarded by each receipt scoring rule.

use rust_decimal::Decimal;

/// Points per ASCII letter or digit in the retailer name
pub const POINTS_PER_RETAILER_CHAR: u64 = 1;

/// Points for a total with no cents
pub const POINTS_ROUND_DOLLAR: u64 = 50;

/// Points for a total that is a multiple of 0.25
pub const POINTS_QUARTER_MULTIPLE: u64 = 25;

/// 0.25
pub const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Points per complete pair of items
pub const POINTS_PER_ITEM_PAIR: u64 = 5;

/// Price multiplier for items whose trimmed description length is a multiple of 3
pub const ITEM_PRICE_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Description length divisor for the item price bonus
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;

/// Points for an odd day of month
pub const POINTS_ODD_DAY: u64 = 6;

/// Points for a purchase strictly between the afternoon bounds
pub const POINTS_AFTERNOON: u64 = 10;

/// Afternoon window start hour (exclusive)
pub const AFTERNOON_START_HOUR: u32 = 14;

/// Afternoon window end hour (exclusive)
pub const AFTERNOON_END_HOUR: u32 = 16;

/// Combined purchase date/time format
pub const PURCHASE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
