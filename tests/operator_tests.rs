use math_vector::{vector::Vector, VectorError};

fn v(values: &[f64]) -> Vector {
    Vector::from(values)
}

#[test]
fn test_operator_plus_vector() {
    let result = (&v(&[1.0, 2.0, 3.0]) + &v(&[4.0, 5.0, 6.0])).unwrap();
    assert_eq!(result, v(&[5.0, 7.0, 9.0]));
}

#[test]
fn test_operator_plus_scalar() {
    assert_eq!(v(&[1.0, 2.0, 3.0]) + 2.0, v(&[3.0, 4.0, 5.0]));
}

#[test]
fn test_operator_minus_vector() {
    let result = (v(&[1.0, 2.0, 3.0]) - v(&[4.0, 5.0, 6.0])).unwrap();
    assert_eq!(result, v(&[-3.0, -3.0, -3.0]));
}

#[test]
fn test_operator_minus_scalar() {
    let vector = v(&[1.0, 2.0, 3.0]);
    assert_eq!(&vector - 2.0, v(&[-1.0, 0.0, 1.0]));
}

#[test]
fn test_operator_multiply_vector() {
    let result = (v(&[1.0, 2.0, 3.0]) * &v(&[4.0, 5.0, 6.0])).unwrap();
    assert_eq!(result, v(&[4.0, 10.0, 18.0]));
}

#[test]
fn test_operator_multiply_scalar() {
    assert_eq!(v(&[1.0, 2.0, 3.0]) * 3.0, v(&[3.0, 6.0, 9.0]));
}

#[test]
fn test_operator_divide_vector() {
    let result = (&v(&[4.0, 6.0, 10.0]) / &v(&[1.0, 2.0, 5.0])).unwrap();
    assert_eq!(result, v(&[4.0, 3.0, 2.0]));
}

#[test]
fn test_operator_divide_scalar() {
    let result = (v(&[6.0, 8.0, 10.0]) / 2.0).unwrap();
    assert_eq!(result, v(&[3.0, 4.0, 5.0]));
}

#[test]
fn test_operator_divide_by_zero() {
    let v1 = v(&[1.0, 2.0]);
    let v2 = v(&[0.0, 4.0]);

    assert_eq!((&v1 / &v2).unwrap_err(), VectorError::DivideByZero);
    assert_eq!((&v1 / 0.0).unwrap_err(), VectorError::DivideByZero);
    assert_eq!((&v1 / -0.0).unwrap_err(), VectorError::DivideByZero);
}

#[test]
fn test_operator_different_dimensions() {
    let v1 = v(&[1.0, 2.0, 3.0]);
    let v2 = v(&[4.0, 5.0]);

    assert!(matches!((&v1 + &v2).unwrap_err(), VectorError::DimensionMismatch { .. }));
    assert!(matches!((&v1 - &v2).unwrap_err(), VectorError::DimensionMismatch { .. }));
    assert!(matches!((&v1 * &v2).unwrap_err(), VectorError::DimensionMismatch { .. }));
    assert!(matches!((&v1 / &v2).unwrap_err(), VectorError::DimensionMismatch { .. }));
}

#[test]
fn test_operators_match_named_operations() {
    let v1 = v(&[1.5, -2.0, 4.0]);
    let v2 = v(&[3.0, 0.5, -1.0]);

    assert_eq!((&v1 + &v2).unwrap(), v1.sum(&v2).unwrap());
    assert_eq!((&v1 - &v2).unwrap(), v1.subtract(&v2).unwrap());
    assert_eq!((&v1 * &v2).unwrap(), v1.multiply(&v2).unwrap());
    assert_eq!((&v1 / &v2).unwrap(), v1.divide(&v2).unwrap());
    assert_eq!(&v1 + 1.0, v1.sum_number(1.0));
    assert_eq!(&v1 * 2.0, v1.multiply_number(2.0));

    // Operands survive borrowed use
    assert_eq!(v1, v(&[1.5, -2.0, 4.0]));
}

#[test]
fn test_operator_chaining() {
    let v1 = v(&[1.0, 2.0]);
    let v2 = v(&[3.0, 4.0]);

    let result = ((&v1 + &v2).unwrap() * 2.0 - 1.0) / 3.0;
    assert_eq!(result.unwrap(), v(&[7.0 / 3.0, 11.0 / 3.0]));
}
