use super::*;
use crate::foundation::core::Dims;

fn px(rgba: [f64; 4]) -> PremulRgba {
    PremulRgba::from_premultiplied(Dims::new(1, 1), rgba.to_vec()).unwrap()
}

#[test]
fn opaque_above_replaces_below() {
    let out = over(&px([0.0, 0.0, 0.0, 1.0]), &px([1.0, 0.0, 0.0, 1.0])).unwrap();
    assert_eq!(out.pixel(0, 0), Some([1.0, 0.0, 0.0, 1.0]));
}

#[test]
fn transparent_above_is_noop() {
    let below = px([0.2, 0.4, 0.6, 0.8]);
    let out = over(&below, &px([0.0, 0.0, 0.0, 0.0])).unwrap();
    assert_eq!(out, below);
}

#[test]
fn half_alpha_blends_all_four_channels() {
    let out = over(&px([1.0, 0.0, 0.0, 1.0]), &px([0.0, 0.0, 0.5, 0.5])).unwrap();
    assert_eq!(out.pixel(0, 0), Some([0.5, 0.0, 0.5, 1.0]));
}

#[test]
fn transparent_below_returns_above() {
    let above = px([0.1, 0.2, 0.3, 0.4]);
    let out = over(&px([0.0; 4]), &above).unwrap();
    assert_eq!(out, above);
}

#[test]
fn over_is_order_dependent() {
    let red = px([1.0, 0.0, 0.0, 1.0]);
    let blue_half = px([0.0, 0.0, 0.5, 0.5]);
    let a = over(&red, &blue_half).unwrap();
    let b = over(&blue_half, &red).unwrap();
    assert_ne!(a, b);
}

#[test]
fn mismatched_dims_are_rejected() {
    let mut acc = px([0.0, 0.0, 0.0, 1.0]);
    let wide = PremulRgba::from_premultiplied(Dims::new(2, 1), vec![0.0; 8]).unwrap();
    assert!(matches!(
        over_in_place(&mut acc, &wide),
        Err(BlendError::ShapeMismatch(_))
    ));
    assert_eq!(acc, px([0.0, 0.0, 0.0, 1.0]));
}
