use super::*;

#[test]
fn mirror_shares_the_axis_column() {
    // one slice, 2 rows, half-width 3
    let c = Cube::new(1, Dims::new(3, 2), vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]).unwrap();
    let full = mirror_fullsize(&c).unwrap();
    assert_eq!(full.shape(), (1, 2, 5));
    assert_eq!(
        full.data(),
        &[2.0, 1.0, 0.0, 1.0, 2.0, 12.0, 11.0, 10.0, 11.0, 12.0]
    );
}

#[test]
fn mirror_applies_to_every_slice() {
    let c = Cube::new(2, Dims::new(2, 1), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let full = mirror_fullsize(&c).unwrap();
    assert_eq!(full.shape(), (2, 1, 3));
    assert_eq!(full.data(), &[2.0, 1.0, 2.0, 4.0, 3.0, 4.0]);
}

#[test]
fn mirror_leaves_square_cubes_alone() {
    let c = Cube::new(1, Dims::new(2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(mirror_fullsize(&c).unwrap(), c);
}

#[test]
fn flip_y_reverses_rows_per_slice() {
    let c = Cube::new(
        2,
        Dims::new(2, 2),
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
    )
    .unwrap();
    let flipped = flip_y(&c).unwrap();
    assert_eq!(
        flipped.data(),
        &[3.0, 4.0, 1.0, 2.0, 7.0, 8.0, 5.0, 6.0]
    );
    assert_eq!(flip_y(&flipped).unwrap(), c);
}
