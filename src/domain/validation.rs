//! Admission rules over identity data and credit decisions.
//!
//! All functions are pure; the caller supplies "today" for the age check.

use chrono::{Datelike, NaiveDate};

/// Minimum age, in whole years, for admission.
pub const MINIMUM_AGE: i32 = 21;

/// Minimum credit limit for users that have one.
pub const MINIMUM_CREDIT_LIMIT: i64 = 500;

/// True iff both names are non-empty.
pub fn has_valid_full_name(firstname: &str, surname: &str) -> bool {
    !firstname.is_empty() && !surname.is_empty()
}

/// True iff the address contains `@` or `.`.
///
/// Either symbol alone is enough.
pub fn has_valid_email(email: &str) -> bool {
    email.contains('@') || email.contains('.')
}

/// Age in whole years on `today`.
///
/// Calendar-year difference, minus one if this year's birthday is still ahead.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();

    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }

    age
}

/// True iff the person born on `date_of_birth` is at least `minimum_age` on `today`.
pub fn is_at_least(minimum_age: i32, date_of_birth: NaiveDate, today: NaiveDate) -> bool {
    age_on(date_of_birth, today) >= minimum_age
}

/// True iff a credit limit applies and is strictly below `threshold`.
pub fn rejects_on_low_limit(has_credit_limit: bool, credit_limit: i64, threshold: i64) -> bool {
    has_credit_limit && credit_limit < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_name_requires_both_parts() {
        assert!(has_valid_full_name("Anatoliy", "Kutukov"));
        assert!(!has_valid_full_name("", "Kutukov"));
        assert!(!has_valid_full_name("Anatoliy", ""));
        assert!(!has_valid_full_name("", ""));
    }

    #[test]
    fn test_email_accepts_at_sign_alone() {
        assert!(has_valid_email("ka_2005@mailru"));
    }

    #[test]
    fn test_email_accepts_dot_alone() {
        // Either symbol is enough; an address without '@' still passes.
        assert!(has_valid_email("ka_2005.mail.ru"));
    }

    #[test]
    fn test_email_rejects_neither_symbol() {
        assert!(!has_valid_email("ka_2005"));
        assert!(!has_valid_email(""));
    }

    #[test]
    fn test_email_accepts_full_address() {
        assert!(has_valid_email("ka_2005@mail.ru"));
    }

    #[test]
    fn test_age_before_birthday_this_year() {
        assert_eq!(age_on(date(1979, 7, 15), date(2021, 2, 25)), 41);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_on(date(2000, 2, 25), date(2021, 2, 25)), 21);
    }

    #[test]
    fn test_age_day_before_birthday() {
        assert_eq!(age_on(date(2000, 2, 26), date(2021, 2, 25)), 20);
    }

    #[test]
    fn test_age_same_month_earlier_day() {
        assert_eq!(age_on(date(2000, 2, 10), date(2021, 2, 25)), 21);
    }

    #[test]
    fn test_is_at_least_boundary() {
        let today = date(2021, 2, 25);
        assert!(is_at_least(MINIMUM_AGE, date(2000, 2, 25), today));
        assert!(!is_at_least(MINIMUM_AGE, date(2000, 2, 26), today));
        assert!(!is_at_least(MINIMUM_AGE, date(2002, 1, 1), today));
    }

    #[test]
    fn test_low_limit_boundary_is_strict() {
        assert!(rejects_on_low_limit(true, 499, MINIMUM_CREDIT_LIMIT));
        assert!(!rejects_on_low_limit(true, 500, MINIMUM_CREDIT_LIMIT));
        assert!(!rejects_on_low_limit(true, 501, MINIMUM_CREDIT_LIMIT));
    }

    #[test]
    fn test_low_limit_ignored_without_credit_limit() {
        assert!(!rejects_on_low_limit(false, 0, MINIMUM_CREDIT_LIMIT));
        assert!(!rejects_on_low_limit(false, 10, MINIMUM_CREDIT_LIMIT));
    }
}
