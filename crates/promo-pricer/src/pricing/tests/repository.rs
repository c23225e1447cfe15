use std::fs;
use std::io::Cursor;

use super::common::*;
use crate::pricing::evaluation::DiscountEngine;
use crate::pricing::import::SaleCsvSource;
use crate::pricing::repository::{CsvSaleStore, JsonlSaleStore, RepositoryError, SaleRepository};
use crate::pricing::service::price_sale;

#[test]
fn csv_store_rewrites_rows_with_settled_columns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("priced.csv");
    let engine = DiscountEngine::standard();

    let store = CsvSaleStore::create(&path).expect("create store");
    store
        .save(&price_sale(&engine, record_with("Cheese - Aged", 10, 20.0, "Visa")))
        .expect("save first");
    store
        .save(&price_sale(&engine, plain_record()))
        .expect("save second");
    drop(store);

    let contents = fs::read_to_string(&path).expect("read output");
    let mut rows = SaleCsvSource::from_reader(Cursor::new(contents));

    let first = rows.next().expect("first row").expect("first row parses");
    assert_eq!(first.product_name, "Cheese - Aged");
    assert_eq!(first.discount, 8.5);
    assert_eq!(first.final_price, 183.0);

    let second = rows.next().expect("second row").expect("second row parses");
    assert_eq!(second.discount, 0.0);
    assert_eq!(second.final_price, second.gross());
}

#[test]
fn jsonl_store_includes_the_audit_breakdown() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("priced.jsonl");
    let engine = DiscountEngine::standard();

    let store = JsonlSaleStore::create(&path).expect("create store");
    store
        .save(&price_sale(&engine, record_with("Cheese - Aged", 10, 20.0, "Visa")))
        .expect("save");
    drop(store);

    let contents = fs::read_to_string(&path).expect("read output");
    let line = contents.lines().next().expect("one line");
    let value: serde_json::Value = serde_json::from_str(line).expect("valid json");

    assert_eq!(value["record"]["final_price"], 183.0);
    let rules: Vec<&str> = value["breakdown"]["contributions"]
        .as_array()
        .expect("contributions array")
        .iter()
        .map(|contribution| contribution["rule"].as_str().expect("rule name"))
        .collect();
    assert_eq!(rules, vec!["category-prefix", "payment-method", "quantity-tier"]);
}

#[test]
fn stores_surface_unwritable_paths() {
    let error = JsonlSaleStore::create("/definitely/missing/dir/out.jsonl")
        .expect_err("expected io error");
    assert!(matches!(error, RepositoryError::Io(_)));

    let error =
        CsvSaleStore::create("/definitely/missing/dir/out.csv").expect_err("expected csv error");
    assert!(matches!(error, RepositoryError::Csv(_)));
}
