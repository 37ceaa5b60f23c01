use std::error::Error;

use matrix_core::{DynamicMatrix, FixedMatrix, Matrix};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("--- Generic linear algebra demo ---");
    float_dynamic_plus_fixed()?;
    int_dynamic_plus_fixed()?;
    mismatched_shapes()?;
    log::info!("All demo scenarios finished");

    Ok(())
}

fn float_dynamic_plus_fixed() -> Result<(), Box<dyn Error>> {
    println!();
    println!(">> f32: dynamic A (3x2) + fixed B (3x2)");

    let a = DynamicMatrix::<f32>::from_rows(&[[1.5, 2.0], [0.0, 1.0], [4.5, 3.0]])?;
    let b = FixedMatrix::from_rows([[0.5f32, 1.0], [2.0, 3.0], [1.0, 1.0]]);
    println!("A =\n{a}");
    println!("B =\n{b}");

    let c = (&a + &b)?;
    println!("C = A + B ({}x{}) =\n{c}", c.rows(), c.cols());
    Ok(())
}

fn int_dynamic_plus_fixed() -> Result<(), Box<dyn Error>> {
    println!();
    println!(">> i32: dynamic D (2x2) + fixed E (2x2)");

    let d = DynamicMatrix::<i32>::from_rows(&[[5, 10], [15, 20]])?;
    let mut e: FixedMatrix<i32, 2, 2> = FixedMatrix::new();
    e.load_values(&[1, 2, 3, 4])?;
    println!("D =\n{d}");
    println!("E =\n{e}");

    let f = d.add(&e)?;
    println!("F = D + E =\n{f}");
    Ok(())
}

fn mismatched_shapes() -> Result<(), Box<dyn Error>> {
    println!();
    println!(">> i32: fixed (2x2) + dynamic (3x2)");

    let small = FixedMatrix::from_rows([[1, 2], [3, 4]]);
    let tall = DynamicMatrix::<i32>::from_rows(&[[1, 2], [3, 4], [5, 6]])?;

    match small.add(&tall) {
        Ok(sum) => println!("Unexpected sum =\n{sum}"),
        Err(err) => println!("No result: {err}"),
    }
    Ok(())
}
