//! Basic Calculator
//!
//! This example walks through the calculator state machine: keying in an
//! expression, evaluating it, applying scientific functions, and moving
//! back and forth with undo/redo.
//!
//! Run with: cargo run --example basic_calculator

use reckon::{Calculator, TrigFunction};

fn main() {
    println!("=== Basic Calculator Example ===\n");

    let mut calc = Calculator::new();

    // Key in "2+3*4" one button at a time
    for key in ["2", "+", "3", "*", "4"] {
        calc.append(key);
    }
    println!("Input:  {}", calc.input());

    calc.evaluate();
    println!("Result: {}", calc.result());

    // Scientific functions commit their own display form
    calc.apply_trig(TrigFunction::Sin, 90.0).unwrap();
    println!("\n{}", calc.history().latest().unwrap());

    calc.apply_log(10.0, 100.0).unwrap();
    println!("{}", calc.history().latest().unwrap());

    calc.apply_root(2.0, 9.0).unwrap();
    println!("{}", calc.history().latest().unwrap());

    // History is bounded: the oldest of the four computations is gone
    println!("\nHistory ({} entries):", calc.history().len());
    for entry in calc.history().entries() {
        println!("  {entry}");
    }

    // Every operation above is undoable
    calc.undo();
    calc.undo();
    println!("\nAfter two undos: {} = {}", calc.input(), calc.result());

    calc.redo();
    println!("After one redo:  {} = {}", calc.input(), calc.result());

    println!("\n=== Example Complete ===");
}
