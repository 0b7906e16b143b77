use im::HashSet;

use crate::error::ExtractError;
use crate::io::RawTable;
use crate::types::{
    Customer, CustomerCode, Invoice, InvoiceCode, InvoiceDate, Item, MonetaryAmount, Quantity,
};

fn customer_from_row(row: &[String]) -> Customer {
    Customer {
        code: CustomerCode::new(row[0].clone()),
        firstname: row[1].clone(),
        lastname: row[2].clone(),
    }
}

fn invoice_from_row(row: &[String]) -> Result<Invoice, ExtractError> {
    Ok(Invoice {
        customer: CustomerCode::new(row[0].clone()),
        code: InvoiceCode::new(row[1].clone()),
        amount: MonetaryAmount::parse(&row[2])?,
        date: InvoiceDate::parse(&row[3])?,
    })
}

fn item_from_row(row: &[String]) -> Result<Item, ExtractError> {
    Ok(Item {
        invoice: InvoiceCode::new(row[0].clone()),
        code: row[1].clone(),
        amount: MonetaryAmount::parse(&row[2])?,
        quantity: Quantity::parse(&row[3])?,
    })
}

/// Customer rows whose code is in the customer sample. Identical rows
/// collapse under set semantics.
pub struct CustomerTable {
    pub header: Vec<String>,
    pub items: HashSet<Customer>,
}

impl CustomerTable {
    pub const COLUMNS: usize = 3;

    pub fn filter(raw: RawTable, sample: &HashSet<CustomerCode>) -> Self {
        let items = raw
            .rows
            .iter()
            .filter(|row| sample.contains(&CustomerCode::new(row[0].clone())))
            .map(|row| customer_from_row(row))
            .collect();
        Self {
            header: raw.header,
            items,
        }
    }
}

/// Invoice rows whose customer code is in the customer sample. The codes of
/// every retained invoice are accumulated alongside; the item stage filters
/// against that set.
pub struct InvoiceTable {
    pub header: Vec<String>,
    pub items: HashSet<Invoice>,
    pub codes: HashSet<InvoiceCode>,
}

impl InvoiceTable {
    pub const COLUMNS: usize = 4;

    pub fn filter(
        raw: RawTable,
        sample: &HashSet<CustomerCode>,
    ) -> Result<Self, ExtractError> {
        let mut items = HashSet::new();
        let mut codes = HashSet::new();
        for row in &raw.rows {
            if sample.contains(&CustomerCode::new(row[0].clone())) {
                let invoice = invoice_from_row(row)?;
                codes.insert(invoice.code.clone());
                items.insert(invoice);
            }
        }
        Ok(Self {
            header: raw.header,
            items,
            codes,
        })
    }
}

/// Invoice item rows whose invoice code survived the invoice stage.
pub struct ItemTable {
    pub header: Vec<String>,
    pub items: HashSet<Item>,
}

impl ItemTable {
    pub const COLUMNS: usize = 4;

    pub fn filter(raw: RawTable, sample: &HashSet<InvoiceCode>) -> Result<Self, ExtractError> {
        let items = raw
            .rows
            .iter()
            .filter(|row| sample.contains(&InvoiceCode::new(row[0].clone())))
            .map(|row| item_from_row(row))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            header: raw.header,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use im::HashSet;

    use super::{CustomerTable, InvoiceTable, ItemTable};
    use crate::error::ExtractError;
    use crate::io::RawTable;
    use crate::types::{Customer, CustomerCode, InvoiceCode};

    fn raw_table(header: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    fn customer_sample(codes: &[&str]) -> HashSet<CustomerCode> {
        codes.iter().map(|code| CustomerCode::new(*code)).collect()
    }

    fn invoice_sample(codes: &[&str]) -> HashSet<InvoiceCode> {
        codes.iter().map(|code| InvoiceCode::new(*code)).collect()
    }

    #[test]
    fn customer_filter_keeps_sample_members_only() {
        let raw = raw_table(
            &["code", "firstname", "lastname"],
            &[&["C1", "Ann", "Lee"], &["C2", "Bob", "Ng"]],
        );

        let table = CustomerTable::filter(raw, &customer_sample(&["C1"]));

        assert_eq!(table.items.len(), 1);
        assert!(table.items.contains(&Customer {
            code: CustomerCode::new("C1"),
            firstname: "Ann".to_string(),
            lastname: "Lee".to_string(),
        }));
    }

    #[test]
    fn customer_filter_keeps_header() {
        let raw = raw_table(&["code", "firstname", "lastname"], &[]);

        let table = CustomerTable::filter(raw, &customer_sample(&["C1"]));

        assert_eq!(table.header, vec!["code", "firstname", "lastname"]);
    }

    #[test]
    fn duplicate_customer_rows_collapse() {
        let raw = raw_table(
            &["code", "firstname", "lastname"],
            &[&["C1", "Ann", "Lee"], &["C1", "Ann", "Lee"]],
        );

        let table = CustomerTable::filter(raw, &customer_sample(&["C1"]));

        assert_eq!(table.items.len(), 1);
    }

    #[test]
    fn empty_sample_retains_nothing() {
        let raw = raw_table(
            &["code", "firstname", "lastname"],
            &[&["C1", "Ann", "Lee"], &["C2", "Bob", "Ng"]],
        );

        let table = CustomerTable::filter(raw, &customer_sample(&[]));

        assert!(table.items.is_empty());
    }

    #[test]
    fn invoice_filter_collects_codes_of_retained_rows() {
        let raw = raw_table(
            &["customer", "code", "amount", "date"],
            &[
                &["C1", "I1", "100.0", "01-Jan-2020"],
                &["C2", "I2", "50.0", "02-Jan-2020"],
            ],
        );

        let table = InvoiceTable::filter(raw, &customer_sample(&["C1"])).unwrap();

        assert_eq!(table.items.len(), 1);
        assert_eq!(table.codes, invoice_sample(&["I1"]));
    }

    #[test]
    fn invoice_filter_fails_on_bad_amount() {
        let raw = raw_table(
            &["customer", "code", "amount", "date"],
            &[&["C1", "I1", "not-a-number", "01-Jan-2020"]],
        );

        let result = InvoiceTable::filter(raw, &customer_sample(&["C1"]));

        assert!(matches!(result, Err(ExtractError::InvalidAmount { .. })));
    }

    #[test]
    fn invoice_filter_fails_on_bad_date() {
        let raw = raw_table(
            &["customer", "code", "amount", "date"],
            &[&["C1", "I1", "100.0", "Jan 1 2020"]],
        );

        let result = InvoiceTable::filter(raw, &customer_sample(&["C1"]));

        assert!(matches!(result, Err(ExtractError::InvalidDate { .. })));
    }

    #[test]
    fn rows_outside_sample_are_never_coerced() {
        let raw = raw_table(
            &["customer", "code", "amount", "date"],
            &[&["C2", "I2", "not-a-number", "01-Jan-2020"]],
        );

        let table = InvoiceTable::filter(raw, &customer_sample(&["C1"])).unwrap();

        assert!(table.items.is_empty());
        assert!(table.codes.is_empty());
    }

    #[test]
    fn item_filter_follows_invoice_sample() {
        let raw = raw_table(
            &["invoice", "code", "amount", "quantity"],
            &[
                &["I1", "IT1", "5.0", "2"],
                &["I9", "IT2", "1.0", "1"],
            ],
        );

        let table = ItemTable::filter(raw, &invoice_sample(&["I1"])).unwrap();

        assert_eq!(table.items.len(), 1);
        assert!(table
            .items
            .iter()
            .all(|item| item.invoice == InvoiceCode::new("I1")));
    }

    #[test]
    fn item_filter_fails_on_bad_quantity() {
        let raw = raw_table(
            &["invoice", "code", "amount", "quantity"],
            &[&["I1", "IT1", "5.0", "two"]],
        );

        let result = ItemTable::filter(raw, &invoice_sample(&["I1"]));

        assert!(matches!(result, Err(ExtractError::InvalidQuantity { .. })));
    }
}
