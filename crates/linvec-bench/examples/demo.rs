//! Walk through the arithmetic surface and print each result.
//!
//! Demonstrates: vector addition, matrix addition, scalar multiplication
//! on both containers, matrix products against the identity, and a
//! matrix-vector product. Run with `RUST_LOG=debug` to see buffer
//! reallocations as they happen.

use std::time::Instant;

use linvec::prelude::*;

fn show(label: &str, value: &impl std::fmt::Display) {
    println!("{label}\n{value}");
}

fn main() -> Result<(), LinalgError> {
    env_logger::init();

    println!("=== Vector addition ===");
    let v1 = Vector::filled(10, 1)?;
    let mut v2 = Vector::with_len(10)?;
    for (i, slot) in v2.iter_mut().enumerate() {
        *slot = i as i32;
    }
    let v3 = &v1 + &v2;
    show("", &v1);
    show("+", &v2);
    show("=", &v3);

    println!("\n=== Matrix addition ===");
    let mut m1 = Matrix::filled(3, 3, 0.1f64)?;
    m1[(1, 1)] = 1.1;
    let m2 = Matrix::filled(3, 3, 0.9)?;
    let m3 = m1.checked_add(&m2)?;
    show("", &m1);
    show("+", &m2);
    show("=", &m3);

    println!("\n=== Vector scalar multiplication ===");
    let v4 = 6 * &v1;
    show("6 *", &v1);
    show("=", &v4);

    println!("\n=== Matrix scalar multiplication ===");
    let m4 = 0.5 * &m1;
    show("0.5 *", &m1);
    show("=", &m4);

    println!("\n=== Matrix multiplication ===");
    let flat = Vector::from_slice(&[1, 0, 0, 1])?;
    let identity = Matrix::from_vector(2, 2, &flat)?;
    let m5 = Matrix::filled(2, 2, 3)?;
    let m6 = m5.matmul(&identity)?;
    let m7 = identity.matmul(&m5)?;
    show("", &m5);
    show("*", &identity);
    show("=", &m6);
    show("should be the same as", &m7);

    println!("\n=== Matrix * Vector ===");
    let v6 = Vector::from_slice(&[2, 2])?;
    let m8 = identity.matvec(&v6)?;
    show("", &identity);
    show("*", &v6);
    show("=", &m8);

    println!("\n=== Growth ===");
    let start = Instant::now();
    let mut grown: Vector<u64> = Vector::new();
    for i in 0..1_000_000 {
        grown.push(i);
    }
    log::info!(
        "pushed {} elements in {:?}, capacity {}",
        grown.len(),
        start.elapsed(),
        grown.capacity()
    );
    println!("len {} capacity {}", grown.len(), grown.capacity());

    Ok(())
}
