//! Algebraic properties of the value types, checked on seeded random inputs.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use zaru_num::{vec3, Error, Matrix, Percentage, SquareMatrix, Vector};

const LOG: bool = false;
const ROUNDS: usize = 50;
const MAX_SIZE: usize = 5;
const MAX_DELTA: f64 = 1e-9;

fn init_logger() {
    if LOG {
        env_logger::builder()
            .is_test(true)
            .filter_module("zaru_num", log::LevelFilter::Trace)
            .try_init()
            .ok();
    }
}

fn random_matrix(rng: &mut fastrand::Rng, height: usize, width: usize) -> Matrix {
    let rows = (0..height)
        .map(|_| (0..width).map(|_| rng.f64() * 20.0 - 10.0).collect())
        .collect();
    Matrix::new(rows).unwrap()
}

fn random_square(rng: &mut fastrand::Rng, size: usize) -> SquareMatrix {
    SquareMatrix::try_from(random_matrix(rng, size, size)).unwrap()
}

/// A random matrix whose diagonal dominates every row, which makes it invertible and
/// well-conditioned.
fn random_invertible(rng: &mut fastrand::Rng, size: usize) -> SquareMatrix {
    let rows = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let elem = rng.f64() * 2.0 - 1.0;
                    if row == col {
                        elem + size as f64 * 2.0
                    } else {
                        elem
                    }
                })
                .collect()
        })
        .collect();
    SquareMatrix::new(rows).unwrap()
}

fn random_percentage(rng: &mut fastrand::Rng) -> Percentage {
    Percentage::new(rng.f64()).unwrap()
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0001);
    for _ in 0..ROUNDS {
        let size = rng.usize(0..=MAX_SIZE);
        let a = random_square(&mut rng, size);
        assert_eq!(a.transpose().transpose(), a);

        let (height, width) = (rng.usize(0..=MAX_SIZE), rng.usize(1..=MAX_SIZE));
        let m = random_matrix(&mut rng, height, width);
        let t = m.transpose();
        assert_eq!((t.height(), t.width()), (m.width(), m.height()));
        assert_eq!(t.transpose(), m);
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0002);
    for _ in 0..ROUNDS {
        let size = rng.usize(0..=MAX_SIZE);
        let a = random_square(&mut rng, size);
        let id = SquareMatrix::identity(a.size());
        assert_eq!(id.times(&a).unwrap(), a);
        assert_eq!(a.times(&id).unwrap(), a);
    }
}

#[test]
fn identity_determinant() {
    for size in 1..=MAX_SIZE {
        assert_eq!(SquareMatrix::identity(size).determinant(), Ok(1.0));
    }
    assert!(matches!(
        SquareMatrix::identity(0).determinant(),
        Err(Error::Undefined(_))
    ));
}

#[test]
fn inverse_times_self_is_identity() {
    init_logger();

    let mut rng = fastrand::Rng::with_seed(0x5eed_0003);
    for _ in 0..ROUNDS {
        let size = rng.usize(1..=MAX_SIZE);
        let a = random_invertible(&mut rng, size);
        let inv = a.invert().unwrap();
        let id = SquareMatrix::identity(size);
        assert_abs_diff_eq!(a.times(&inv).unwrap(), id, epsilon = MAX_DELTA);
        assert_abs_diff_eq!(inv.times(&a).unwrap(), id, epsilon = MAX_DELTA);
    }
}

#[test]
fn determinant_is_multiplicative() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0004);
    for _ in 0..ROUNDS {
        let size = rng.usize(1..=4);
        let a = random_invertible(&mut rng, size);
        let b = random_invertible(&mut rng, size);
        let ab = a.times(&b).unwrap();
        assert_relative_eq!(
            ab.determinant().unwrap(),
            a.determinant().unwrap() * b.determinant().unwrap(),
            epsilon = MAX_DELTA,
            max_relative = MAX_DELTA,
        );
        assert_relative_eq!(
            a.transpose().determinant().unwrap(),
            a.determinant().unwrap(),
            epsilon = MAX_DELTA,
            max_relative = MAX_DELTA,
        );
    }
}

#[test]
fn product_shape() {
    init_logger();

    let mut rng = fastrand::Rng::with_seed(0x5eed_0005);
    for _ in 0..ROUNDS {
        // Without rows, `Matrix::new` cannot express a width, so keep `m` and `n` non-zero.
        let (m, n, p) = (
            rng.usize(1..=MAX_SIZE),
            rng.usize(1..=MAX_SIZE),
            rng.usize(0..=MAX_SIZE),
        );
        let a = random_matrix(&mut rng, m, n);
        let b = random_matrix(&mut rng, n, p);
        let ab = a.times(&b).unwrap();
        assert_eq!(ab.height(), a.height());
        assert_eq!(ab.width(), b.width());

        // (AB)ᵀ = BᵀAᵀ
        let bt_at = b.transpose().times(&a.transpose()).unwrap();
        assert_relative_eq!(ab.transpose(), bt_at);
    }
}

#[test]
fn mismatched_product() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0006);
    let a = random_matrix(&mut rng, 2, 3);
    let b = random_matrix(&mut rng, 2, 3);
    assert_eq!(
        a.times(&b),
        Err(Error::DimensionMismatch {
            operation: "matrix product",
            expected: 3,
            found: 2,
        })
    );
}

#[test]
fn scale_distributes_over_product() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0007);
    for _ in 0..ROUNDS {
        let a = random_matrix(&mut rng, 3, 2);
        let b = random_matrix(&mut rng, 2, 4);
        let k = rng.f64() * 4.0 - 2.0;
        assert_relative_eq!(
            a.scale(k).unwrap().times(&b).unwrap(),
            a.times(&b).unwrap().scale(k).unwrap(),
            epsilon = MAX_DELTA,
        );
        assert_eq!(a.scale(1.0).unwrap(), a);
    }
}

#[test]
fn conjugate_is_an_involution() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0008);
    for _ in 0..ROUNDS {
        let p = random_percentage(&mut rng);
        assert_relative_eq!(p.conjugate().unwrap().conjugate().unwrap(), p, epsilon = 1e-15);
    }
    assert!(matches!(
        Percentage::new(1.5).unwrap().conjugate(),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn percentage_extrema() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0009);
    for _ in 0..ROUNDS {
        let values = [
            random_percentage(&mut rng),
            random_percentage(&mut rng),
            random_percentage(&mut rng),
        ];
        let max = Percentage::max_of(&values).unwrap();
        let min = Percentage::min_of(&values).unwrap();
        assert!(values.iter().all(|&p| min <= p && p <= max));
        assert!(values.contains(&max));
        assert!(values.contains(&min));
        assert_eq!(Some(&max), values.iter().max());
        assert_eq!(Some(&min), values.iter().min());
    }
}

#[test]
fn percentage_monoid() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_000a);
    for _ in 0..ROUNDS {
        let (a, b, c) = (
            random_percentage(&mut rng),
            random_percentage(&mut rng),
            random_percentage(&mut rng),
        );
        assert_eq!(a * Percentage::ONE, a);
        assert_eq!(a * Percentage::ZERO, Percentage::ZERO);
        assert_eq!(a * b, b * a);
        assert_relative_eq!((a * b) * c, a * (b * c));
        let clamped = c.clamp(a, b);
        assert!(clamped >= a.min(b) && clamped <= a.max(b));
    }
    assert_eq!(
        Percentage::new(0.5).unwrap().times(Percentage::new(0.5).unwrap()),
        Percentage::new(0.25).unwrap()
    );
}

#[test]
fn percentage_strings() {
    let half = "50%".parse::<Percentage>().unwrap();
    assert_eq!(half.to_string(), "50%");
    assert_eq!(
        "abc%".parse::<Percentage>(),
        Err(Error::Format {
            input: "abc%".to_string()
        })
    );

    for percent in [0, 1, 25, 50, 99, 100, 150, 1000] {
        let text = format!("{percent}%");
        assert_eq!(text.parse::<Percentage>().unwrap().to_string(), text);
    }

    for value in [1e306, 1e307, f64::MAX] {
        let p = Percentage::new(value).unwrap();
        assert_eq!(p.to_string().parse::<Percentage>(), Ok(p));
    }
}

#[test]
fn vector_products() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_000b);
    let mut random_vec3 = || vec3(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5);
    for _ in 0..ROUNDS {
        let (a, b) = (random_vec3(), random_vec3());
        let c = a.cross(&b).unwrap();
        assert_abs_diff_eq!(c.dot(&a).unwrap(), 0.0, epsilon = MAX_DELTA);
        assert_abs_diff_eq!(c.dot(&b).unwrap(), 0.0, epsilon = MAX_DELTA);
        assert_relative_eq!(b.cross(&a).unwrap(), -c);
        assert_relative_eq!(a.dot(&a).unwrap().sqrt(), a.magnitude());
    }

    let v4 = Vector::from([1.0, 2.0, 3.0, 4.0]);
    assert!(matches!(
        v4.cross(&v4),
        Err(Error::DimensionMismatch { expected: 3, .. })
    ));
}

#[test]
fn matrix_from_vectors() {
    let rows = [vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)];
    let mat = Matrix::from_rows(&rows).unwrap();
    assert_eq!(mat.shape(), (2, 3));
    assert_eq!(mat.row(1), Some(rows[1].as_slice()));
}
