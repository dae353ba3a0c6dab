//! This file defines the closed set of expense categories.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The category assigned to an expense.
///
/// The set is closed: every expense belongs to exactly one of these, and
/// anything that does not fit goes under [Category::Others].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, restaurants, takeaways.
    Food,
    /// Rent, mortgage payments, maintenance.
    Housing,
    /// Fuel, public transport, vehicle running costs.
    Transportation,
    /// Movies, games, nights out.
    Entertainment,
    /// Clothing, gadgets, one-off purchases.
    Shopping,
    /// Power, water, internet, phone.
    Utilities,
    /// Doctor visits, prescriptions, insurance.
    Healthcare,
    /// Anything that does not fit the categories above.
    Others,
}

impl Category {
    /// Every category, in the order the expense form lists them.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Housing,
        Category::Transportation,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Healthcare,
        Category::Others,
    ];

    /// The display name of the category.
    ///
    /// This is also the form the category takes in persisted snapshots and
    /// CSV exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Housing => "Housing",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Others => "Others",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(text))
            .ok_or_else(|| Error::UnknownCategory(text.to_owned()))
    }
}

#[cfg(test)]
mod category_tests {
    use crate::Error;

    use super::Category;

    #[test]
    fn parse_category_accepts_every_display_name() {
        for category in Category::ALL {
            let parsed = category.as_str().parse::<Category>();

            assert_eq!(Ok(category), parsed);
        }
    }

    #[test]
    fn parse_category_is_case_insensitive() {
        assert_eq!(Ok(Category::Food), "food".parse());
        assert_eq!(Ok(Category::Healthcare), "HEALTHCARE".parse());
    }

    #[test]
    fn parse_category_rejects_unknown_names() {
        let result = "Groceries".parse::<Category>();

        assert_eq!(Err(Error::UnknownCategory("Groceries".to_owned())), result);
    }

    #[test]
    fn category_serializes_as_plain_name() {
        let json = serde_json::to_string(&Category::Transportation).unwrap();

        assert_eq!("\"Transportation\"", json);
    }
}
