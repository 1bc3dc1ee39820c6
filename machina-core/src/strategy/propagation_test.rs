use super::*;
use approx::assert_relative_eq;

#[test]
fn dot_product_of_reference_vectors() {
    let dot = Propagation::dot_product();
    assert_relative_eq!(dot.apply(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
}

#[test]
fn dot_product_of_empty_vectors_is_zero() {
    let dot = Propagation::dot_product();
    assert_relative_eq!(dot.apply(&[], &[]), 0.0);
}

#[test]
fn dot_product_truncates_at_shorter_vector() {
    let dot = Propagation::dot_product();
    assert_relative_eq!(dot.apply(&[1.0, 2.0, 3.0], &[4.0, 5.0]), 14.0);
    assert_relative_eq!(dot.apply(&[4.0, 5.0], &[1.0, 2.0, 3.0]), 14.0);
}

#[test]
fn caller_supplied_reduction() {
    let sum_both = Propagation::from_fn(|a, b| {
        a.iter().sum::<f64>() + b.iter().sum::<f64>()
    });
    assert_relative_eq!(sum_both.apply(&[1.0, 2.0], &[3.0]), 6.0);
}
