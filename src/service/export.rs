use crate::db::AdrRecord;
use crate::error::AdrError;

pub const CSV_HEADER: [&str; 6] = ["ID", "Name", "Age", "Drug", "Reaction", "Severity"];
pub const CSV_FILENAME: &str = "adr_export.csv";

/// Encode one CSV row, CRLF-terminated. Fields are quoted only when needed.
fn csv_row<I, T>(fields: I) -> Result<Vec<u8>, AdrError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    writer
        .into_inner()
        .map_err(|e| AdrError::Csv(e.into_error().into()))
}

pub fn csv_line(rec: &AdrRecord) -> Result<Vec<u8>, AdrError> {
    csv_row([
        rec.id.to_string().as_str(),
        rec.name.as_str(),
        rec.age.to_string().as_str(),
        rec.drug.as_str(),
        rec.reaction.as_str(),
        rec.severity.as_str(),
    ])
}

/// Header row followed by one row per record, in the order given.
pub fn csv_lines(records: &[AdrRecord]) -> Result<Vec<Vec<u8>>, AdrError> {
    std::iter::once(csv_row(CSV_HEADER))
        .chain(records.iter().map(csv_line))
        .collect()
}
