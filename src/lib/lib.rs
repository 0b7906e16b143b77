mod error;
mod io;
mod tables;
mod types;

use std::fmt;
use std::path::PathBuf;

use tracing::info;

pub use error::ExtractError;

use io::{CustomerRowEntity, InvoiceRowEntity, ItemRowEntity};
use tables::{CustomerTable, InvoiceTable, ItemTable};

/// File locations for one extract run. `Default` wires up the fixed layout
/// the tool is deployed with: inputs under `input/`, outputs under `output/`.
#[derive(Debug, Clone)]
pub struct SamplePaths {
    pub customer_sample: PathBuf,
    pub customers: PathBuf,
    pub invoices: PathBuf,
    pub items: PathBuf,
    pub customers_out: PathBuf,
    pub invoices_out: PathBuf,
    pub items_out: PathBuf,
}

impl SamplePaths {
    /// Fixed file names joined onto the given input and output directories.
    pub fn from_dirs(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = output.into();
        Self {
            customer_sample: input.join("CUSTOMER_SAMPLE.CSV"),
            customers: input.join("CUSTOMER.CSV"),
            invoices: input.join("INVOICE.CSV"),
            items: input.join("INVOICE_ITEM.CSV"),
            customers_out: output.join("customer.csv"),
            invoices_out: output.join("invoice.csv"),
            items_out: output.join("invoice_item.csv"),
        }
    }
}

impl Default for SamplePaths {
    fn default() -> Self {
        Self::from_dirs("input", "output")
    }
}

/// Retained row counts of one completed run.
#[derive(Debug, PartialEq, Eq)]
pub struct ExtractSummary {
    pub customers: usize,
    pub invoices: usize,
    pub items: usize,
}

impl fmt::Display for ExtractSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} customers, {} invoices, {} invoice items",
            self.customers, self.invoices, self.items
        )
    }
}

/// Runs the three filter stages in order: customers and invoices are kept
/// when their customer code is in the seed sample, invoice items are kept
/// when their invoice code survived the invoice stage. Each stage writes its
/// output before the next begins; a failure aborts the run and leaves the
/// outputs of earlier stages on disk.
pub fn extract_sample(paths: &SamplePaths) -> Result<ExtractSummary, ExtractError> {
    let customer_sample = io::read_seed(&paths.customer_sample)?;
    info!("{} customer codes in sample", customer_sample.len());

    let customers = CustomerTable::filter(
        io::read_table(&paths.customers, CustomerTable::COLUMNS)?,
        &customer_sample,
    );
    io::write_csv(
        &paths.customers_out,
        &customers.header,
        customers.items.iter().map(CustomerRowEntity::from_customer),
    )?;
    info!("kept {} customer rows", customers.items.len());

    let invoices = InvoiceTable::filter(
        io::read_table(&paths.invoices, InvoiceTable::COLUMNS)?,
        &customer_sample,
    )?;
    io::write_csv(
        &paths.invoices_out,
        &invoices.header,
        invoices.items.iter().map(InvoiceRowEntity::from_invoice),
    )?;
    info!(
        "kept {} invoice rows covering {} invoice codes",
        invoices.items.len(),
        invoices.codes.len()
    );

    // The item stage keys on the codes collected by the invoice stage.
    let items = ItemTable::filter(
        io::read_table(&paths.items, ItemTable::COLUMNS)?,
        &invoices.codes,
    )?;
    io::write_csv(
        &paths.items_out,
        &items.header,
        items.items.iter().map(ItemRowEntity::from_item),
    )?;
    info!("kept {} invoice item rows", items.items.len());

    Ok(ExtractSummary {
        customers: customers.items.len(),
        invoices: invoices.items.len(),
        items: items.items.len(),
    })
}
