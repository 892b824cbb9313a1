use std::io::Read;

use tracing::debug;

use cleargate_core::ShipmentRecord;

use crate::error::IngestError;

/// Adapt a headed CSV document into shipment records, one entry per data row.
///
/// Rows are independent: a row that cannot be coerced (non-numeric text in a
/// numeric column, structurally broken quoting) becomes an `Err` entry at its
/// position and never aborts the remaining rows. Blank numeric cells coerce
/// to `0`, matching the record's "missing means zero" invariant. Header names
/// accept the same aliases as the JSON payload (`hscode`, `input_text`,
/// `OriginCountry`).
pub fn read_csv<R: Read>(reader: R) -> Vec<Result<ShipmentRecord, IngestError>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let rows: Vec<Result<ShipmentRecord, IngestError>> = csv_reader
        .deserialize::<ShipmentRecord>()
        .enumerate()
        .map(|(index, row)| {
            row.map_err(|err| IngestError::Row {
                row: index,
                message: err.to_string(),
            })
        })
        .collect();

    debug!(
        rows = rows.len(),
        rejected = rows.iter().filter(|r| r.is_err()).count(),
        "csv ingest complete"
    );
    rows
}
