//! Walk through the main operations of `mtl::Matrix`.
//!
//! Run with `RUST_LOG=debug cargo run --example demo` to see the
//! reallocation and shape-change diagnostics.

use mtl::{matrix, Matrix, MatrixResult};

fn main() -> MatrixResult<()> {
    env_logger::init();

    let mut a = matrix![[1, 2], [3, 4]];
    println!("a =\n{a}\n");

    a.power(2)?;
    println!("a^2 =\n{a}\n");

    let b: Matrix<i32, 3, 2> = Matrix::from_flat(&[1, 2, 3, 4, 5, 6])?;
    let c: Matrix<i32, 2, 3> = Matrix::from_flat(&[1, 2, 3, 4, 5, 6])?;
    let mut p = b.clone();
    p *= &c;
    println!(
        "b * c ({}x{}, declared {:?}) =\n{p}\n",
        p.row_size(),
        p.col_size(),
        p.declared_size()
    );

    let f = matrix![[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]];
    println!("det(f) = {}", f.determinant()?);
    println!("det(b) = {:?}", b.determinant().map_err(|e| e.to_string()));

    let t = b.transpose();
    println!("\nb^T =\n{t}\n");

    let id: Matrix<f64, 3, 3> = Matrix::eye();
    println!("eye is diagonal: {}", id.is_diagonal());

    {
        let mut row = a.row_mut(0)?;
        row.assign(&[0, 0])?;
    }
    println!("a after clearing row 0: {}", a.row(0)?);

    let total: i32 = a.iter().sum();
    println!("sum of a = {total}");

    match a.at(5, 0) {
        Ok(x) => println!("unexpected value {x}"),
        Err(e) => println!("a.at(5, 0): {e} ({:?})", e.kind()),
    }

    let wide: Matrix<f64, 4, 4> = Matrix::from_matrix(&a)?;
    println!("\na widened to 4x4 f64 =\n{wide}");

    Ok(())
}
