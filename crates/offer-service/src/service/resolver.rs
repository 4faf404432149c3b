//! # Offer Lifecycle Resolver
//!
//! Pure status computation: given an offer's stored status, its creation date, its validity
//! window and "today", decide what the status should be. Nothing here touches a store or a
//! clock.
//!
//! | stored | condition | resolved |
//! |--------|-----------|----------|
//! | `cancelled` | any | `cancelled` |
//! | `expired` | any | `expired` |
//! | `undefined` / `valid` | `today > createdOn + daysValidFor` | `expired` |
//! | `undefined` / `valid` | otherwise | `valid` |
//!
//! The last valid day is `createdOn + daysValidFor` itself. A window that runs past the end of
//! the calendar never expires.

use crate::config::DateFormat;
use crate::model::{Offer, OfferStatus};
use chrono::{Days, NaiveDate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("createdOn {input:?} does not match date format {format:?}: {source}")]
    DateParseFailure {
        input: String,
        format: String,
        source: chrono::ParseError,
    },
}

/// Resolves a status from already-parsed dates.
pub fn resolve(
    status: OfferStatus,
    created_on: NaiveDate,
    days_valid_for: u32,
    today: NaiveDate,
) -> OfferStatus {
    match status {
        OfferStatus::Cancelled | OfferStatus::Expired => status,
        OfferStatus::Undefined | OfferStatus::Valid => {
            match created_on.checked_add_days(Days::new(u64::from(days_valid_for))) {
                Some(last_valid_day) if today > last_valid_day => OfferStatus::Expired,
                _ => OfferStatus::Valid,
            }
        }
    }
}

/// Resolves the status of a stored offer.
///
/// Terminal statuses are returned without reading `createdOn`, so a malformed date on a
/// cancelled or expired offer is never an error.
pub fn resolve_offer(
    offer: &Offer,
    today: NaiveDate,
    format: &DateFormat,
) -> Result<OfferStatus, ResolveError> {
    if offer.status.is_terminal() {
        return Ok(offer.status);
    }
    let created_on =
        format
            .parse(&offer.created_on)
            .map_err(|source| ResolveError::DateParseFailure {
                input: offer.created_on.clone(),
                format: format.pattern().to_string(),
                source,
            })?;
    Ok(resolve(offer.status, created_on, offer.days_valid_for, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OfferId, ProductId};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn offer(status: OfferStatus, created_on: &str, days_valid_for: u32) -> Offer {
        Offer {
            id: OfferId(1),
            description: "Spring sale".to_string(),
            price: Decimal::new(100, 0),
            currency_code: "EUR".to_string(),
            created_on: created_on.to_string(),
            days_valid_for,
            product_id: ProductId(4621346),
            status,
        }
    }

    #[test]
    fn test_terminal_states_are_untouched() {
        let created = date(2000, 1, 1);
        let today = date(2026, 10, 19);
        for status in [OfferStatus::Cancelled, OfferStatus::Expired] {
            assert_eq!(resolve(status, created, 0, today), status);
            assert_eq!(resolve(status, today, 365, created), status);
        }
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let created = date(2026, 10, 1);
        for status in [OfferStatus::Undefined, OfferStatus::Valid] {
            assert_eq!(
                resolve(status, created, 20, date(2026, 10, 21)),
                OfferStatus::Valid
            );
            assert_eq!(
                resolve(status, created, 20, date(2026, 10, 22)),
                OfferStatus::Expired
            );
            assert_eq!(resolve(status, created, 20, created), OfferStatus::Valid);
        }
    }

    #[test]
    fn test_zero_day_window_lasts_one_day() {
        let created = date(2026, 10, 19);
        assert_eq!(
            resolve(OfferStatus::Undefined, created, 0, created),
            OfferStatus::Valid
        );
        assert_eq!(
            resolve(OfferStatus::Valid, created, 0, date(2026, 10, 20)),
            OfferStatus::Expired
        );
    }

    #[test]
    fn test_overflowing_window_never_expires() {
        assert_eq!(
            resolve(OfferStatus::Valid, NaiveDate::MAX, 1, NaiveDate::MAX),
            OfferStatus::Valid
        );
    }

    #[test]
    fn test_forty_day_old_offer_with_twenty_day_window_expires() {
        let today = date(2026, 10, 19);
        let created_on = DateFormat::default().format(today - Days::new(40));
        let resolved =
            resolve_offer(&offer(OfferStatus::Valid, &created_on, 20), today, &DateFormat::default());
        assert_eq!(resolved, Ok(OfferStatus::Expired));
    }

    #[test]
    fn test_unparseable_date_is_reported() {
        let format = DateFormat::default();
        let err = resolve_offer(
            &offer(OfferStatus::Valid, "2026-10-19", 20),
            date(2026, 10, 19),
            &format,
        )
        .unwrap_err();
        let ResolveError::DateParseFailure { input, format, .. } = err;
        assert_eq!(input, "2026-10-19");
        assert_eq!(format, "%d/%m/%Y");
    }

    #[test]
    fn test_terminal_offer_skips_date_parsing() {
        let resolved = resolve_offer(
            &offer(OfferStatus::Cancelled, "not a date", 20),
            date(2026, 10, 19),
            &DateFormat::default(),
        );
        assert_eq!(resolved, Ok(OfferStatus::Cancelled));
    }
}
