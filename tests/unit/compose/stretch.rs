use super::*;
use crate::foundation::core::Dims;
use crate::foundation::error::BlendError;

fn img(data: Vec<f64>) -> PremulRgba {
    let pixels = data.len() / 4;
    PremulRgba::from_premultiplied(Dims::new(pixels, 1), data).unwrap()
}

#[test]
fn stretch_scales_color_to_unit_peak() {
    let mut i = img(vec![0.5, 0.0, 0.25, 1.0, 0.1, 0.2, 0.0, 0.5]);
    let max = stretch_contrast(&mut i).unwrap();
    assert_eq!(max, 0.5);
    assert_eq!(i.data(), &[1.0, 0.0, 0.5, 1.0, 0.2, 0.4, 0.0, 0.5]);
}

#[test]
fn alpha_is_ignored_when_finding_the_peak() {
    let mut i = img(vec![0.25, 0.0, 0.0, 1.0]);
    stretch_contrast(&mut i).unwrap();
    assert_eq!(i.pixel(0, 0), Some([1.0, 0.0, 0.0, 1.0]));
}

#[test]
fn stretch_is_idempotent() {
    let mut i = img(vec![0.3, 0.6, 0.9, 1.0, 0.0, 0.45, 0.2, 1.0]);
    stretch_contrast(&mut i).unwrap();
    let once = i.clone();
    let max = stretch_contrast(&mut i).unwrap();
    assert_eq!(max, 1.0);
    assert_eq!(i, once);
}

#[test]
fn black_image_is_degenerate() {
    let mut i = img(vec![0.0, 0.0, 0.0, 1.0]);
    assert!(matches!(
        stretch_contrast(&mut i),
        Err(BlendError::DegenerateInput(_))
    ));
}
