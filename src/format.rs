use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a slot date like "05_3_2024" as "05 Mar 2024".
///
/// Malformed input comes back unchanged; a bad date from the backend
/// should never take the whole listing down.
pub fn slot_date(slot: &str) -> String {
    let parts: Vec<&str> = slot.split('_').collect();
    if parts.len() != 3 {
        return slot.to_string();
    }
    let month = match parts[1].parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => MONTHS[m],
        _ => return slot.to_string(),
    };
    format!("{} {} {}", parts[0], month, parts[2])
}

/// Decimal string for a payment amount: whole fees drop the fraction,
/// matching what the checkout widget was handed ("40", not "40.0").
pub fn decimal(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}

/// Fee with the configured currency symbol, e.g. "$40".
pub fn fee(currency: &str, amount: f64) -> String {
    format!("{currency}{}", decimal(amount))
}

/// Age in calendar years from an ISO birthdate ("1990-07-21").
///
/// The year difference only, ignoring whether the birthday has passed
/// this year; that is what the management console has always displayed.
pub fn age(dob: &str, today: NaiveDate) -> Option<i32> {
    let birth = NaiveDate::parse_from_str(dob, "%Y-%m-%d").ok()?;
    Some(today.year() - birth.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_date_formats() {
        assert_eq!(slot_date("05_3_2024"), "05 Mar 2024");
        assert_eq!(slot_date("21_12_2025"), "21 Dec 2025");
    }

    #[test]
    fn test_slot_date_malformed_passthrough() {
        assert_eq!(slot_date("2024-03-05"), "2024-03-05");
        assert_eq!(slot_date("05_13_2024"), "05_13_2024");
        assert_eq!(slot_date(""), "");
    }

    #[test]
    fn test_fee_display() {
        assert_eq!(fee("$", 40.0), "$40");
        assert_eq!(fee("$", 12.5), "$12.5");
    }

    #[test]
    fn test_decimal_amount() {
        assert_eq!(decimal(40.0), "40");
        assert_eq!(decimal(12.5), "12.5");
    }

    #[test]
    fn test_age_year_difference() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(age("1990-07-21", today), Some(34));
        assert_eq!(age("2024-01-01", today), Some(0));
        assert_eq!(age("not-a-date", today), None);
    }
}
