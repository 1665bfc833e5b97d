use approx::assert_abs_diff_eq;
use ndarray::ArrayD;
use ndreduce::elementwise::{map, to_scalar};
use ndreduce::like::{ones_like, zeros_like};
use ndreduce::reduce::reduce_along_dim;
use ndreduce::statistics::{max_axis, mean_axis, min_axis, sum_axis, StatOperation, StatisticalReduction};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds the 3-D test array (2x3x4) with values 1..=24
fn test_array() -> ArrayD<f64> {
    let test_data: Vec<f64> = (1..=24).map(f64::from).collect();
    ArrayD::from_shape_vec(vec![2, 3, 4], test_data).expect("Failed to create array from test data")
}

#[test]
fn test_reduce_min_max_integration() {
    init_logs();
    let data = test_array();

    // Reduce along axis 0 - should result in a 1x3x4 array
    let min_result_x = min_axis(&data, 0).expect("Failed to reduce min along axis 0");
    assert_eq!(min_result_x.shape(), &[1, 3, 4]);

    // Expected minimums along axis 0:
    // [0,0,:] vs [1,0,:] -> min([1,2,3,4], [13,14,15,16]) = [1,2,3,4]
    // [0,1,:] vs [1,1,:] -> min([5,6,7,8], [17,18,19,20]) = [5,6,7,8]
    // [0,2,:] vs [1,2,:] -> min([9,10,11,12], [21,22,23,24]) = [9,10,11,12]
    assert_eq!(min_result_x[[0, 0, 0]], 1.0);
    assert_eq!(min_result_x[[0, 0, 1]], 2.0);
    assert_eq!(min_result_x[[0, 1, 0]], 5.0);
    assert_eq!(min_result_x[[0, 2, 3]], 12.0);

    // Reduce along axis 1 - should result in a 2x1x4 array
    let min_result_y = min_axis(&data, 1).expect("Failed to reduce min along axis 1");
    assert_eq!(min_result_y.shape(), &[2, 1, 4]);
    assert_eq!(min_result_y[[0, 0, 0]], 1.0);
    assert_eq!(min_result_y[[0, 0, 3]], 4.0);
    assert_eq!(min_result_y[[1, 0, 0]], 13.0);
    assert_eq!(min_result_y[[1, 0, 3]], 16.0);

    // Reduce max along axis 2 - should result in a 2x3x1 array
    let max_result_z = max_axis(&data, 2).expect("Failed to reduce max along axis 2");
    assert_eq!(max_result_z.shape(), &[2, 3, 1]);
    assert_eq!(max_result_z[[0, 0, 0]], 4.0);
    assert_eq!(max_result_z[[0, 1, 0]], 8.0);
    assert_eq!(max_result_z[[0, 2, 0]], 12.0);
    assert_eq!(max_result_z[[1, 0, 0]], 16.0);
    assert_eq!(max_result_z[[1, 1, 0]], 20.0);
    assert_eq!(max_result_z[[1, 2, 0]], 24.0);

    // The spread max - min along axis 2 is 3 at every position
    let spread = &max_result_z - &min_axis(&data, 2).expect("Failed to reduce min along axis 2");
    assert!(spread.iter().all(|&s| s == 3.0));
}

#[test]
fn test_chained_reductions() {
    init_logs();
    let data = test_array();

    // Reducing every axis in turn collapses the array to a single element;
    // each step keeps the rank and pins one more axis to extent 1
    let m0 = mean_axis(&data, 0).expect("Failed to reduce mean along axis 0");
    assert_eq!(m0.shape(), &[1, 3, 4]);
    let m1 = mean_axis(&m0, 1).expect("Failed to reduce mean along axis 1");
    assert_eq!(m1.shape(), &[1, 1, 4]);
    let m2 = mean_axis(&m1, 2).expect("Failed to reduce mean along axis 2");
    assert_eq!(m2.shape(), &[1, 1, 1]);

    // Overall mean of 1..=24
    let overall = to_scalar(&m2).expect("Failed to extract scalar");
    assert_abs_diff_eq!(overall, 12.5, epsilon = 1e-12);

    // The same chain with sums totals the whole array
    let total = sum_axis(&data, 0)
        .and_then(|s| sum_axis(&s, 1))
        .and_then(|s| sum_axis(&s, 2))
        .and_then(|s| to_scalar(&s))
        .expect("Failed to chain sum reductions");
    assert_eq!(total, 300.0);
}

#[test]
fn test_trait_dispatch_integration() {
    init_logs();
    let data = test_array();

    for operation in [
        StatOperation::Mean,
        StatOperation::Sum,
        StatOperation::Min,
        StatOperation::Max,
        StatOperation::Variance,
        StatOperation::Std,
    ] {
        let result = data
            .reduce_along_axis(1, operation)
            .unwrap_or_else(|e| panic!("Failed to compute {}: {}", operation.as_str(), e));
        assert_eq!(result.shape(), &[2, 1, 4], "wrong shape for {}", operation.as_str());
    }
}

#[test]
fn test_centering_pipeline() {
    init_logs();
    let data = test_array();

    // Center the data by its axis-0 mean; the reduced axis keeps extent 1,
    // so the result broadcasts straight back against the input
    let mean = mean_axis(&data, 0).expect("Failed to reduce mean along axis 0");
    let centered = &data - &mean;
    assert_eq!(centered.shape(), data.shape());

    // Residuals along the centered axis sum to zero
    let residual = sum_axis(&centered, 0).expect("Failed to reduce sum along axis 0");
    for &r in residual.iter() {
        assert_abs_diff_eq!(r, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_like_constructors_integration() {
    init_logs();
    let data = test_array();

    // ones_like doubled and summed counts the collapsed extents
    let twos = map(&ones_like(&data), |e| e * 2.0);
    let col_sums = sum_axis(&twos, 0).expect("Failed to reduce sum along axis 0");
    assert!(col_sums.iter().all(|&s| s == 4.0));

    // zeros_like is absorbed by any seedless sum
    let zeros = zeros_like(&data);
    let folded = reduce_along_dim(&zeros, 2, None, |acc, sub| acc + &sub)
        .expect("Failed to reduce zeros");
    assert_eq!(folded.shape(), &[2, 3, 1]);
    assert!(folded.iter().all(|&z| z == 0.0));
}
