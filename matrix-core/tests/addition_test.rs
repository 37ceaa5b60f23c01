use matrix_core::{DynamicMatrix, FixedMatrix, Matrix, MatrixError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper for float comparison in tests
fn assert_approx_eq_grid(actual: &dyn Matrix<Value = f32>, expected: &[&[f32]], tolerance: f32) {
    assert_eq!(actual.rows(), expected.len(), "Row counts differ");
    for (i, expected_row) in expected.iter().enumerate() {
        assert_eq!(actual.cols(), expected_row.len(), "Column counts differ");
        for (j, &want) in expected_row.iter().enumerate() {
            let got = actual.element_at(i, j).unwrap();
            assert!(
                (got - want).abs() <= tolerance,
                "Verification failed at ({}, {}): expected {}, got {}",
                i,
                j,
                want,
                got
            );
        }
    }
}

fn sample_grid(rows: usize, cols: usize, seed: i64) -> Vec<Vec<i64>> {
    (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| (i as i64 * 31 + j as i64 * 7 + seed) % 97 - 40)
                .collect()
        })
        .collect()
}

#[test]
fn test_scenario_float_dynamic_plus_fixed() {
    init_logger();
    let mut a = DynamicMatrix::<f32>::new(3, 2);
    a.load_rows(&[[1.5, 2.0], [0.0, 1.0], [4.5, 3.0]]).unwrap();
    let b = FixedMatrix::from_rows([[0.5f32, 1.0], [2.0, 3.0], [1.0, 1.0]]);

    let c: DynamicMatrix<f32> = (&a + &b).unwrap();

    assert_approx_eq_grid(&c, &[&[2.0, 3.0], &[2.0, 4.0], &[5.5, 4.0]], 1e-6);
    assert_eq!(c.render(), "| 2 | 3 |\n| 2 | 4 |\n| 5.5 | 4 |\n");
}

#[test]
fn test_scenario_int_dynamic_plus_fixed() {
    init_logger();
    let d = DynamicMatrix::<i32>::from_rows(&[[5, 10], [15, 20]]).unwrap();
    let mut e: FixedMatrix<i32, 2, 2> = FixedMatrix::new();
    e.load_values(&[1, 2, 3, 4]).unwrap();

    let f = d.add(&e).unwrap();

    assert_eq!(f.dims(), (2, 2));
    assert_eq!(f.as_slice(), &[6, 12, 18, 24]);
}

#[test]
fn test_scenario_shape_mismatch_returns_error() {
    init_logger();
    let two_by_two = FixedMatrix::from_rows([[1, 2], [3, 4]]);
    let three_by_two = DynamicMatrix::<i32>::from_rows(&[[1, 2], [3, 4], [5, 6]]).unwrap();

    let err = two_by_two.add(&three_by_two).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            left: (2, 2),
            right: (3, 2)
        }
    );
    assert!(err.to_string().contains("same dimensions"));

    // Also rejected the other way round
    assert!((&three_by_two + &two_by_two).is_err());
}

#[test]
fn test_sum_matches_cellwise_addition() {
    init_logger();
    for &(rows, cols) in &[(1, 1), (2, 5), (7, 3), (4, 12)] {
        let left = DynamicMatrix::<i64>::from_rows(&sample_grid(rows, cols, 3)).unwrap();
        let right = DynamicMatrix::<i64>::from_rows(&sample_grid(rows, cols, 58)).unwrap();

        let sum = (&left + &right).unwrap();
        for i in 0..rows {
            for j in 0..cols {
                assert_eq!(
                    sum.element_at(i, j).unwrap(),
                    left.element_at(i, j).unwrap() + right.element_at(i, j).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_addition_is_commutative_across_variants() {
    init_logger();
    let fixed = FixedMatrix::from_rows([[1i64, -2, 3], [4, 5, -6]]);
    let dynamic = DynamicMatrix::<i64>::from_rows(&sample_grid(2, 3, 11)).unwrap();

    let forward = (&fixed + &dynamic).unwrap();
    let backward = (&dynamic + &fixed).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_result_is_independent_of_operands() {
    init_logger();
    let mut a = DynamicMatrix::<i32>::from_rows(&[[1, 1], [1, 1]]).unwrap();
    let b = FixedMatrix::from_rows([[2, 2], [2, 2]]);

    let sum = (&a + &b).unwrap();
    a.set(0, 0, 100).unwrap();

    assert_eq!(sum.get(0, 0), Some(3));
}

#[test]
fn test_mixed_collection_of_trait_objects() {
    init_logger();
    let a = DynamicMatrix::<i32>::from_rows(&[[1, 2], [3, 4]]).unwrap();
    let b = FixedMatrix::from_rows([[10, 20], [30, 40]]);
    let c: FixedMatrix<i32, 3, 1> = FixedMatrix::new();
    let operands: Vec<&dyn Matrix<Value = i32>> = vec![&a, &b, &c];

    let mut total = DynamicMatrix::<i32>::new(2, 2);
    let mut rejected = 0;
    for operand in operands {
        match total.add(operand) {
            Ok(sum) => total = sum,
            Err(MatrixError::DimensionMismatch { .. }) => rejected += 1,
            Err(other) => panic!("Unexpected error: {}", other),
        }
    }

    assert_eq!(rejected, 1);
    assert_eq!(total.as_slice(), &[11, 22, 33, 44]);
}

#[test]
fn test_round_trip_after_load() {
    init_logger();
    let grid = sample_grid(5, 11, 1);
    let mut matrix = DynamicMatrix::<i64>::new(5, 11);
    matrix.load_rows(&grid).unwrap();

    for (i, row) in grid.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            assert_eq!(matrix.element_at(i, j), Ok(value));
        }
    }
}

#[test]
fn test_copy_and_move_semantics() {
    init_logger();
    let mut original = DynamicMatrix::<i32>::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();

    let mut copy = original.clone();
    copy.set(1, 2, -1).unwrap();
    assert_eq!(original.get(1, 2), Some(6));

    let moved = original.take();
    assert_eq!(moved.get(1, 2), Some(6));
    assert_eq!(original.dims(), (0, 0));
    assert!(original.element_at(0, 0).is_err());

    // An emptied matrix still takes part in addition with another empty one
    let empty_sum = (&original + &DynamicMatrix::<i32>::default()).unwrap();
    assert!(empty_sum.is_empty());
}
