//! # Forward Values and Gradients of Small Graphs
//!
//! Builds two tiny expressions, runs the backward pass, and prints every
//! gradient so the chain rule can be followed by eye.
//!
//! Run with: `cargo run --example graph_gradients`

use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    // f = x * y + x
    let x = Value::new(2.0);
    let y = Value::new(3.0);
    let f = &x * &y + &x;

    println!("f = x * y + x  with x = 2, y = 3");
    println!("forward output: {}", f.data());

    f.backward()?;
    println!("df/dx = {}", x.grad());
    println!("df/dy = {}", y.grad());

    // a = x * y; b = a + z; L = b
    let x = Value::new(2.0);
    let y = Value::new(-3.0);
    let z = Value::new(10.0);

    let a = &x * &y;
    let b = &a + &z;
    let loss = &b;

    println!("\na = x * y; b = a + z; L = b  with x = 2, y = -3, z = 10");
    println!("a = {}", a.data());
    println!("b = {}", b.data());
    println!("L = {}", loss.data());

    loss.backward()?;
    println!("dL/dx = {}", x.grad());
    println!("dL/dy = {}", y.grad());
    println!("dL/dz = {}", z.grad());

    Ok(())
}
