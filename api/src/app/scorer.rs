//! Receipt scorer
//!
//! Pure scoring of a [`Receipt`] under the fixed rule set. Rules are additive;
//! fields are validated in rule order so the first bad field is the one reported:
//!
//! 1. One point per ASCII alphanumeric character in the retailer name
//! 2. 75 points for a total with no cents (round dollar plus quarter multiple)
//! 3. Otherwise 25 points for a total that is a multiple of 0.25
//! 4. 5 points per complete pair of items
//! 5. `ceil(price * 0.2)` per item whose trimmed description length is a multiple of 3
//! 6. 6 points for an odd purchase day
//! 7. 10 points for a purchase strictly between 14:00 and 16:00
//!
//! Amounts are exact decimals, so the total bonuses never depend on float rounding.

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::app::points_config::*;
use crate::domain::entities::{Item, Receipt};
use crate::error::ScoreError;

/// Per-rule contributions of a single scoring run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rules, or `None` if it does not fit in a `u64`
    pub fn total(&self) -> Option<u64> {
        [
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .try_fold(self.retailer, u64::checked_add)
    }
}

/// Score a receipt
pub fn score(receipt: &Receipt) -> Result<u64, ScoreError> {
    let points = breakdown(receipt)?;
    tracing::debug!(breakdown = ?points, "Scored receipt from {:?}", receipt.retailer);
    points.total().ok_or(ScoreError::PointsOverflow)
}

/// Score a receipt, keeping each rule's contribution
pub fn breakdown(receipt: &Receipt) -> Result<PointsBreakdown, ScoreError> {
    let mut points = PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        ..Default::default()
    };

    let total = parse_amount(&receipt.total)
        .ok_or_else(|| ScoreError::UnparsableTotal(receipt.total.clone()))?;
    if (total % Decimal::ONE).is_zero() {
        points.round_total = POINTS_ROUND_DOLLAR + POINTS_QUARTER_MULTIPLE;
    } else if (total % QUARTER).is_zero() {
        points.quarter_total = POINTS_QUARTER_MULTIPLE;
    }

    points.item_pairs = (receipt.items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR;

    for item in &receipt.items {
        points.item_descriptions = points
            .item_descriptions
            .checked_add(item_points(item)?)
            .ok_or(ScoreError::PointsOverflow)?;
    }

    let purchased_at = parse_purchase_datetime(&receipt.purchase_date, &receipt.purchase_time)?;

    if purchased_at.day() % 2 == 1 {
        points.odd_day = POINTS_ODD_DAY;
    }

    let minute_of_day = purchased_at.hour() * 60 + purchased_at.minute();
    if minute_of_day > AFTERNOON_START_HOUR * 60 && minute_of_day < AFTERNOON_END_HOUR * 60 {
        points.afternoon = POINTS_AFTERNOON;
    }

    Ok(points)
}

/// Count ASCII letters and digits; everything else scores nothing
pub fn retailer_points(retailer: &str) -> u64 {
    retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64
        * POINTS_PER_RETAILER_CHAR
}

/// Bonus for one item; the price is validated even when the description does not qualify
fn item_points(item: &Item) -> Result<u64, ScoreError> {
    let price = parse_amount(&item.price).ok_or_else(|| ScoreError::UnparsablePrice {
        description: item.short_description.clone(),
        price: item.price.clone(),
    })?;

    let description_len = item.short_description.trim_matches(' ').len();
    if description_len % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return Ok(0);
    }

    price
        .checked_mul(ITEM_PRICE_MULTIPLIER)
        .and_then(|bonus| bonus.ceil().to_u64())
        .ok_or(ScoreError::PointsOverflow)
}

/// Parse a non-negative decimal amount
fn parse_amount(raw: &str) -> Option<Decimal> {
    raw.parse::<Decimal>()
        .ok()
        .filter(|value| *value >= Decimal::ZERO)
}

/// Parse date and time as one value; anything but the exact layout is rejected
fn parse_purchase_datetime(date: &str, time: &str) -> Result<NaiveDateTime, ScoreError> {
    let combined = format!("{} {}", date, time);
    let invalid = || ScoreError::UnparsableDateTime {
        date: date.to_string(),
        time: time.to_string(),
    };

    let parsed = NaiveDateTime::parse_from_str(&combined, PURCHASE_DATETIME_FORMAT)
        .map_err(|_| invalid())?;

    // chrono accepts unpadded fields; require the canonical form
    if parsed.format(PURCHASE_DATETIME_FORMAT).to_string() != combined {
        return Err(invalid());
    }

    Ok(parsed)
}
