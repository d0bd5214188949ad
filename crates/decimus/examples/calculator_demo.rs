//! Worked examples for the string calculator.
//!
//! Run with `cargo run --example calculator_demo`.

use decimus::prelude::*;

fn show_binary(op: &str, lhs: &str, rhs: &str, result: &Result<String, CalcError>) {
    match result {
        Ok(value) => println!("{lhs} {op} {rhs} = {value}"),
        Err(error) => println!("{lhs} {op} {rhs} failed: {error}"),
    }
}

fn show_unary(op: &str, operand: &str, result: &Result<String, CalcError>) {
    match result {
        Ok(value) => println!("{op}({operand}) = {value}"),
        Err(error) => println!("{op}({operand}) failed: {error}"),
    }
}

fn main() {
    println!("=== String Calculator Demonstration ===\n");

    // Addition of integers far beyond machine width
    let a = "123456789012345678901234567890";
    let b = "987654321098765432109876543210";
    show_binary("+", a, b, &eval::add(a, b));

    // Decimal points and scientific notation
    show_binary("+", "123.456", "789.012", &eval::add("123.456", "789.012"));
    show_binary("+", "1.23e5", "4.56e4", &eval::add("1.23e5", "4.56e4"));
    show_binary("+", "1.23^5", "4.56^4", &eval::add("1.23^5", "4.56^4"));

    println!("\n--- Using Decimal directly for subtraction ---");
    let lhs: Decimal = "987654321".parse().unwrap();
    let rhs: Decimal = "123456789".parse().unwrap();
    println!("{lhs} - {rhs} = {}", &lhs - &rhs);

    println!("\n--- Multiplication ---");
    show_binary("*", "12345", "67890", &eval::multiply("12345", "67890"));
    show_binary("*", "123.45", "67.890", &eval::multiply("123.45", "67.890"));

    println!("\n--- Division ---");
    show_binary("/", "1000", "3", &eval::divide("1000", "3"));
    show_binary("/", "10", "3", &eval::divide("10", "3"));

    println!("\n--- Square Root ---");
    show_unary("sqrt", "144", &eval::sqrt("144"));
    show_unary("sqrt", "1234567890123456789", &eval::sqrt("1234567890123456789"));

    println!("\n--- Very Large Numbers ---");
    let nines = "9999999999999999999999999999999999999999";
    show_binary("+", nines, "1", &eval::add(nines, "1"));

    println!("\n--- Error Handling ---");
    show_unary("sqrt", "-100", &eval::sqrt("-100"));
    show_binary("/", "100", "0", &eval::divide("100", "0"));
    show_binary("+", "123abc", "456", &eval::add("123abc", "456"));
}
