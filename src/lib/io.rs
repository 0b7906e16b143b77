use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use im::HashSet;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::error::ExtractError;
use crate::types::{Customer, CustomerCode, Invoice, InvoiceDate, Item};

/// A csv table read into memory: the header row plus every data row, each
/// decomposed into the declared number of columns.
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file))
}

fn record_to_row(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

/// Loads the seed set of customer codes: column 0 of every data row of the
/// sample file. The header row is skipped; an empty file yields an empty set.
pub fn read_seed(path: &Path) -> Result<HashSet<CustomerCode>, ExtractError> {
    let mut reader = open_reader(path)?;

    let mut codes = HashSet::new();
    for record in reader.records() {
        let record = record.map_err(|source| ExtractError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        match record.get(0) {
            Some(code) => {
                codes.insert(CustomerCode::new(code));
            }
            None => {
                return Err(ExtractError::EmptyRow {
                    path: path.to_path_buf(),
                })
            }
        }
    }
    Ok(codes)
}

/// Reads a whole table, enforcing `columns` on every data row. The header is
/// kept as-is so it can be replayed into the output file.
pub fn read_table(path: &Path, columns: usize) -> Result<RawTable, ExtractError> {
    let mut reader = open_reader(path)?;

    let header = reader.headers().map_err(|source| ExtractError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    if header.is_empty() {
        return Err(ExtractError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    let header = record_to_row(header);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ExtractError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() != columns {
            return Err(ExtractError::ColumnCount {
                path: path.to_path_buf(),
                expected: columns,
                found: record.len(),
            });
        }
        rows.push(record_to_row(&record));
    }

    Ok(RawTable { header, rows })
}

fn decimal_text<S: Serializer>(x: &Decimal, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&x.to_string())
}

fn date_text<S: Serializer>(x: &InvoiceDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&x.to_string())
}

#[derive(Debug, Serialize)]
pub struct CustomerRowEntity {
    code: String,
    firstname: String,
    lastname: String,
}

impl CustomerRowEntity {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            code: customer.code.value().to_string(),
            firstname: customer.firstname.clone(),
            lastname: customer.lastname.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvoiceRowEntity {
    customer: String,
    code: String,
    #[serde(serialize_with = "decimal_text")]
    amount: Decimal,
    #[serde(serialize_with = "date_text")]
    date: InvoiceDate,
}

impl InvoiceRowEntity {
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            customer: invoice.customer.value().to_string(),
            code: invoice.code.value().to_string(),
            amount: invoice.amount.value(),
            date: invoice.date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemRowEntity {
    invoice: String,
    code: String,
    #[serde(serialize_with = "decimal_text")]
    amount: Decimal,
    quantity: i64,
}

impl ItemRowEntity {
    pub fn from_item(item: &Item) -> Self {
        Self {
            invoice: item.invoice.value().to_string(),
            code: item.code.clone(),
            amount: item.amount.value(),
            quantity: item.quantity.value(),
        }
    }
}

/// Writes the retained header followed by one line per record, every field
/// quoted. The destination is truncated if it already exists.
pub fn write_csv<S, I>(path: &Path, header: &[String], rows: I) -> Result<(), ExtractError>
where
    S: Serialize,
    I: IntoIterator<Item = S>,
{
    let file = File::create(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .has_headers(false)
        .from_writer(file);

    let csv_err = |source| ExtractError::Csv {
        path: path.to_path_buf(),
        source,
    };
    writer.write_record(header).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
