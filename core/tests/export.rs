//! CSV export: headers, row counts, empty cells for nulls, no staging leftovers.

use std::{fs, path::PathBuf};
use vehicle_sales_core::{
    customer::Customer,
    engine::GenerationEngine,
    export::export_dataset,
    order::Order,
    payment::Payment,
    table::Table,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vehicle-sales-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn read_csv(path: &PathBuf) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).expect("csv opens");
    let headers = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader.records().collect::<Result<Vec<_>, _>>().expect("rows parse");
    (headers, rows)
}

fn empty_cells(rows: &[csv::StringRecord], column: usize) -> usize {
    rows.iter().filter(|r| r.get(column) == Some("")).count()
}

#[test]
fn exported_files_match_the_dataset() {
    let _ = env_logger::builder().is_test(true).try_init();
    let engine = GenerationEngine::build_test().unwrap();
    let dataset = engine.run().unwrap();
    let dir = scratch_dir("export");

    let files = export_dataset(&dataset, &dir).expect("export succeeds");

    let (headers, rows) = read_csv(&files.customers);
    assert_eq!(headers, Customer::COLUMNS);
    assert_eq!(rows.len(), dataset.customers.len());
    let email_col = Customer::COLUMNS.iter().position(|c| *c == "email").unwrap();
    let missing_emails = dataset.customers.iter().filter(|c| c.email.is_none()).count();
    assert_eq!(empty_cells(&rows, email_col), missing_emails);
    assert_eq!(&rows[0][0], "CUST10000");

    let (headers, rows) = read_csv(&files.orders);
    assert_eq!(headers, Order::COLUMNS);
    assert_eq!(rows.len(), dataset.orders.len());
    let price_col = Order::COLUMNS.iter().position(|c| *c == "price").unwrap();
    let missing_prices = dataset.orders.iter().filter(|o| o.price.is_none()).count();
    assert_eq!(empty_cells(&rows, price_col), missing_prices);

    let (headers, rows) = read_csv(&files.payments);
    assert_eq!(headers, Payment::COLUMNS);
    assert_eq!(rows.len(), dataset.payments.len());
    let status_col = Payment::COLUMNS.iter().position(|c| *c == "payment_status").unwrap();
    for (row, payment) in rows.iter().zip(&dataset.payments) {
        let expected = payment.payment_status.map(|s| s.to_string()).unwrap_or_default();
        assert_eq!(&row[status_col], expected);
        assert_eq!(&row[5], payment.payment_date.format("%Y-%m-%d").to_string());
    }

    let leftovers: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "staging files left behind: {leftovers:?}");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn export_creates_missing_directories() {
    let engine = GenerationEngine::build_test().unwrap();
    let dataset = engine.run().unwrap();
    let dir = scratch_dir("nested").join("a").join("b");

    let files = export_dataset(&dataset, &dir).unwrap();
    assert!(files.customers.exists() && files.orders.exists() && files.payments.exists());

    fs::remove_dir_all(dir.parent().unwrap().parent().unwrap()).unwrap();
}

#[test]
fn failed_rename_rolls_back_every_file() {
    let engine = GenerationEngine::build_test().unwrap();
    let dataset = engine.run().unwrap();
    let dir = scratch_dir("blocked");
    // A directory where orders.csv should go makes that rename fail after
    // customers.csv has already been published.
    fs::create_dir_all(dir.join("orders.csv")).unwrap();

    assert!(export_dataset(&dataset, &dir).is_err());

    let mut left: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    left.sort();
    assert_eq!(left, ["orders.csv"], "only the blocking directory may remain");
    assert!(dir.join("orders.csv").is_dir());

    fs::remove_dir_all(&dir).unwrap();
}
