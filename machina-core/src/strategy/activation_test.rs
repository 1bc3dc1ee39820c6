use super::*;
use approx::assert_relative_eq;

#[test]
fn sigmoid_forward_at_zero_is_half() {
    let act = Activation::sigmoid();
    assert_relative_eq!(act.forward(0.0), 0.5);
}

#[test]
fn sigmoid_derivative_at_half_is_quarter() {
    let act = Activation::sigmoid();
    assert_relative_eq!(act.derivative(0.5), 0.25);
}

#[test]
fn sigmoid_saturates() {
    let act = Activation::sigmoid();
    assert!(act.forward(20.0) > 0.999);
    assert!(act.forward(-20.0) < 0.001);
}

#[test]
fn softplus_uses_base_ten_log() {
    let act = Activation::softplus();
    assert_relative_eq!(act.forward(0.0), 2.0_f64.log10());
    // derivative is the sigmoid of the output value
    assert_relative_eq!(act.derivative(0.0), 0.5);
}

#[test]
fn hyperbolic_tan_forward() {
    let act = Activation::hyperbolic_tan();
    assert_relative_eq!(act.forward(0.0), 0.0);
    assert_relative_eq!(act.forward(1.0), 1.0_f64.tanh());
}

#[test]
fn hyperbolic_tan_derivative_is_sech_squared() {
    let act = Activation::hyperbolic_tan();
    // sech(0) = 1
    assert_relative_eq!(act.derivative(0.0), 1.0);
    let y: f64 = 0.7;
    let sech = 1.0 / y.cosh();
    assert_relative_eq!(act.derivative(y), sech * sech, epsilon = 1e-12);
}

#[test]
fn caller_supplied_activation() {
    let identity = Activation::new(|x| x, |_| 1.0);
    assert_relative_eq!(identity.forward(3.25), 3.25);
    assert_relative_eq!(identity.derivative(3.25), 1.0);
}
