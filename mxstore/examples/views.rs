//! Example walking through storages, views and the operator
//!
//! Run with `RUST_LOG=debug` to see allocations, operator runs and rejected
//! structural mutations.

use mxstore::factory::DenseFactory;
use mxstore::view::{MatrixViewExt, VectorViewExt};
use mxstore::{
    fill_matrix, BitSymmetricMatrix, DenseMatrix, DynamicFactory, Matrix, MatrixError,
    MatrixFactory, OperatorBuilder, Shared, SparseVector, StandardRing, StorageConfig,
    StorageKind, Triangle, Vector,
};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

fn init_subscriber() {
    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();
}

fn print_matrix<M: Matrix<i64>>(name: &str, matrix: &M) -> Result<(), MatrixError> {
    println!("{name} ({}, {}x{}):", matrix.storage_kind(), matrix.lines(), matrix.columns());
    for line in 0..matrix.lines() {
        let cells = (0..matrix.columns())
            .map(|column| matrix.get(line, column).map(|v| format!("{v:>4}")))
            .collect::<Result<Vec<_>, _>>()?;
        println!("  {}", cells.join(""));
    }
    Ok(())
}

fn main() -> Result<(), MatrixError> {
    init_subscriber();
    let ring = StandardRing::<i64>::new();

    println!("=== Views over a dense matrix ===");
    let mut dense = fill_matrix(&DenseFactory::new(0i64), 3, 4, 1..=12)?;
    print_matrix("backing", &dense)?;
    {
        let corners = (&mut dense).sub_matrix(vec![0, 2], vec![0, 3])?;
        print_matrix("corners", &corners)?;
        let mut flipped = (&mut dense).transpose();
        flipped.set(3, 0, 40)?;
    }
    print_matrix("after writing through the transpose", &dense)?;

    println!("\n=== Selection picks the cheapest view ===");
    let evens = (&mut dense).select(&[0, 2], &[0, 2])?;
    println!("  rows 0,2 / cols 0,2 is_sequence={}", evens.is_sequence());
    let scattered = (&mut dense).select(&[2, 0], &[1, 3])?;
    println!("  rows 2,0 / cols 1,3 is_sequence={}", scattered.is_sequence());

    println!("\n=== Structural legality ===");
    let factory = DynamicFactory::new(
        StorageConfig::new(StorageKind::Triangular).with_triangle(Triangle::Upper),
        0i64,
        ring,
    );
    let mut upper = factory.create_matrix(3, 3)?;
    upper.set(0, 2, 5)?;
    match upper.swap_lines(0, 1) {
        Err(err) => println!("  swap on {}: {err}", upper.storage_kind()),
        Ok(()) => println!("  swap on {} unexpectedly succeeded", upper.storage_kind()),
    }
    match upper.set(2, 0, 1) {
        Err(err) => println!("  write below the diagonal: {err}"),
        Ok(()) => println!("  write below the diagonal unexpectedly succeeded"),
    }

    println!("\n=== Shared handles ===");
    let shared = Shared::new(SparseVector::new(6, 0i64));
    let mut odd = shared.clone().sub_vector_seq(mxstore::IndexSequence::new(1, 2, 3)?)?;
    odd.set(2, 9)?;
    println!(
        "  wrote odd[2]; backing[5]={} stored={}",
        shared.borrow().get(5)?,
        shared.borrow().stored_count()
    );

    println!("\n=== Operator ===");
    let operator = OperatorBuilder::new()
        .factory(DenseFactory::new(0i64))
        .ring(ring)
        .build()?;
    let left = DenseMatrix::from_row_major(2, 2, vec![1, 2, 3, 4])?;
    let product = operator.multiply(&left, &left)?;
    print_matrix("left * left", &product)?;

    println!("\n=== Bit-packed symmetry ===");
    let mut adjacency = BitSymmetricMatrix::new(4, false)?;
    adjacency.set(0, 3, true)?;
    adjacency.set(2, 1, true)?;
    println!(
        "  edges={} (3,0)={} symmetric={}",
        adjacency.count_set(),
        adjacency.get(3, 0)?,
        adjacency.is_symmetric(None)?
    );

    Ok(())
}
