//! Operators for numeric and date attributes.
//!
//! The widgets for `condition-number`, `dropdown-slider` and `date-picker`
//! attributes collect an operator and an operand, then hand the reducer a
//! single pre-formatted search value such as `>=7.5` or `<01/31/2024`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NumericCondition {
    #[default]
    GreaterThan,
    GreaterThanOrEqual,
    Equal,
    LessThanOrEqual,
    LessThan,
}

impl NumericCondition {
    pub const ALL: [NumericCondition; 5] = [
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::Equal,
        Self::LessThanOrEqual,
        Self::LessThan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GreaterThan => "Is greater than",
            Self::GreaterThanOrEqual => "Is greater than or equal to",
            Self::Equal => "Is equal to",
            Self::LessThanOrEqual => "Is less than or equal to",
            Self::LessThan => "Is less than",
        }
    }

    pub fn operator(&self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Equal => "=",
            Self::LessThanOrEqual => "<=",
            Self::LessThan => "<",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Returns `None` when the operand is blank or not a number.
    pub fn search_value(&self, operand: &str) -> Option<String> {
        let operand = operand.trim();
        operand.parse::<f64>().ok()?;
        Some(format!("{}{}", self.operator(), operand))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateCondition {
    Before,
    #[default]
    On,
    After,
}

impl DateCondition {
    pub const ALL: [DateCondition; 3] = [Self::Before, Self::On, Self::After];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Before => "Before",
            Self::On => "On",
            Self::After => "After",
        }
    }

    pub fn operator(&self) -> &'static str {
        match self {
            Self::Before => "<",
            // '=' is rejected by the backend, a bare date already matches the whole day
            Self::On => "",
            Self::After => ">",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Formats an ISO `YYYY-MM-DD` date (as produced by a date input) as `<op>MM/DD/YYYY`.
    pub fn search_value(&self, iso_date: &str) -> Option<String> {
        let mut parts = iso_date.trim().splitn(3, '-');
        let year = parts.next()?;
        let month = parts.next()?;
        let day = parts.next()?;
        let is_numeric = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
        if !is_numeric(year, 4) || !is_numeric(month, 2) || !is_numeric(day, 2) {
            return None;
        }
        Some(format!("{}{month}/{day}/{year}", self.operator()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_conditions_prefix_the_operand() {
        assert_eq!(NumericCondition::GreaterThanOrEqual.search_value(" 7.5 "), Some(">=7.5".to_string()));
        assert_eq!(NumericCondition::Equal.search_value("0"), Some("=0".to_string()));
        assert_eq!(NumericCondition::LessThan.search_value("abc"), None);
        assert_eq!(NumericCondition::LessThan.search_value(""), None);
    }

    #[test]
    fn labels_round_trip() {
        for condition in NumericCondition::ALL {
            assert_eq!(NumericCondition::from_label(condition.label()), Some(condition));
        }
        for condition in DateCondition::ALL {
            assert_eq!(DateCondition::from_label(condition.label()), Some(condition));
        }
        assert_eq!(DateCondition::from_label("During"), None);
    }

    #[test]
    fn on_date_has_no_operator() {
        assert_eq!(DateCondition::On.operator(), "");
        assert_eq!(DateCondition::On.search_value("2024-01-31"), Some("01/31/2024".to_string()));
        assert_eq!(DateCondition::Before.search_value("2024-01-31"), Some("<01/31/2024".to_string()));
        assert_eq!(DateCondition::After.search_value("2024-01-31"), Some(">01/31/2024".to_string()));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert_eq!(DateCondition::After.search_value(""), None);
        assert_eq!(DateCondition::After.search_value("2024-1-31"), None);
        assert_eq!(DateCondition::After.search_value("31/01/2024"), None);
    }
}
