//! Display formatting shared by the list and detail pages.
//!
//! Pages are rendered for a pt-BR audience: dates as `DD/MM/YYYY`, money as
//! `R$ 0.00`. Calendar dates are taken in UTC.

use crate::model::Address;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Text shown for a date the API sent in a shape we cannot read.
pub const INVALID_DATE: &str = "Invalid Date";

/// Parses the date shapes the API produces: RFC 3339 timestamps, timestamps
/// without offset, and plain `YYYY-MM-DD`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn date_pt_br(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

pub fn currency_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("R$ {:.2}", rounded)
}

pub fn quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Three-line postal address as shown in the shipping section.
pub fn shipping_address(address: &Address) -> String {
    format!(
        "{}, {}, {}\n{}, {} - {}\nCEP: {}",
        address.street,
        address.number,
        address.complement.as_deref().unwrap_or_default(),
        address.neighborhood,
        address.city,
        address.state,
        address.zip_code,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn utc_timestamp_renders_day_first() {
        assert_eq!(date_pt_br("2024-03-05T00:00:00Z"), "05/03/2024");
    }

    #[test]
    fn plain_date_renders_day_first() {
        assert_eq!(date_pt_br("2024-01-01"), "01/01/2024");
    }

    #[test]
    fn offset_timestamp_uses_utc_calendar_day() {
        assert_eq!(date_pt_br("2024-03-05T23:30:00-03:00"), "06/03/2024");
    }

    #[test]
    fn timestamp_without_offset_is_accepted() {
        assert_eq!(date_pt_br("2024-12-31T10:15:00.250"), "31/12/2024");
    }

    #[test]
    fn garbage_date_is_flagged() {
        assert_eq!(date_pt_br("yesterday"), INVALID_DATE);
    }

    #[test]
    fn currency_pads_to_two_decimals() {
        assert_eq!(currency_brl(Decimal::from_str("9.5").unwrap()), "R$ 9.50");
        assert_eq!(currency_brl(Decimal::from(12)), "R$ 12.00");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(currency_brl(Decimal::from_str("10.005").unwrap()), "R$ 10.01");
    }

    #[test]
    fn quantity_drops_trailing_zeros() {
        assert_eq!(quantity(Decimal::from_str("2.0").unwrap()), "2");
        assert_eq!(quantity(Decimal::from_str("2.50").unwrap()), "2.5");
    }

    #[test]
    fn address_spans_three_lines() {
        let address = Address {
            street: "Rua das Flores".into(),
            number: "10".into(),
            complement: None,
            neighborhood: "Centro".into(),
            city: "Recife".into(),
            state: "PE".into(),
            zip_code: "50000-000".into(),
        };

        assert_eq!(
            shipping_address(&address),
            "Rua das Flores, 10, \nCentro, Recife - PE\nCEP: 50000-000"
        );
    }
}
