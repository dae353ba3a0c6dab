//! Serializes the record set as CSV text.

use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, models::Expense};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Serialize `records` as CSV with the columns Name, Amount, Category, Date.
///
/// One row per record in store order. Text fields are double-quoted, amounts
/// are written as bare numbers. An empty record set produces only the header
/// row; refusing to export nothing is the caller's concern.
///
/// # Errors
/// Returns [Error::Csv] if a row could not be written, which should not
/// happen with an in-memory writer.
pub fn to_csv(records: &[Expense]) -> Result<String, Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_writer(Vec::new());

    writer
        .write_record(["Name", "Amount", "Category", "Date"])
        .map_err(|error| Error::Csv(error.to_string()))?;

    for expense in records {
        let date = expense
            .date
            .format(&DATE_FORMAT)
            .map_err(|error| Error::Csv(error.to_string()))?;

        writer
            .write_record([
                expense.name.as_str(),
                &expense.amount.to_string(),
                expense.category.as_str(),
                &date,
            ])
            .map_err(|error| Error::Csv(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::Csv(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::Csv(error.to_string()))
}
