use super::*;

#[test]
fn from_rgb_and_alpha_interleaves() {
    let img = StraightRgba::from_rgb_and_alpha(
        Dims::new(2, 1),
        &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        &[0.5, 0.25],
    )
    .unwrap();
    assert_eq!(img.pixel(0, 0), Some([1.0, 0.0, 0.0, 0.5]));
    assert_eq!(img.pixel(1, 0), Some([0.0, 1.0, 0.0, 0.25]));
    assert_eq!(img.pixel(2, 0), None);
}

#[test]
fn from_rgb_and_alpha_checks_lengths() {
    assert!(matches!(
        StraightRgba::from_rgb_and_alpha(Dims::new(2, 1), &[1.0; 6], &[1.0]),
        Err(BlendError::ShapeMismatch(_))
    ));
}

#[test]
fn premultiply_scales_color_not_alpha() {
    let img = StraightRgba::new(Dims::new(1, 1), vec![0.8, 0.4, 1.0, 0.5])
        .unwrap()
        .premultiply();
    assert_eq!(img.pixel(0, 0), Some([0.4, 0.2, 0.5, 0.5]));
}

#[test]
fn to_rgba8_unpremultiplies_and_clamps() {
    let img = PremulRgba::from_premultiplied(
        Dims::new(3, 1),
        vec![
            0.5, 0.0, 0.25, 0.5, // half-transparent
            2.0, -1.0, 1.0, 1.0, // out of range
            0.3, 0.3, 0.3, 0.0, // fully transparent
        ],
    )
    .unwrap();
    assert_eq!(
        img.to_rgba8(),
        vec![255, 0, 128, 128, 255, 0, 255, 255, 0, 0, 0, 0]
    );
}

#[test]
fn premultiplied_length_is_checked() {
    assert!(PremulRgba::from_premultiplied(Dims::new(2, 2), vec![0.0; 15]).is_err());
}
