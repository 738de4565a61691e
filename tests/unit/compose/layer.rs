use super::*;
use crate::color::resolver::NamedColors;
use crate::foundation::core::Dims;
use crate::foundation::error::BlendError;

fn map(values: &[f64]) -> IntensityMap {
    IntensityMap::new(Dims::new(values.len(), 1), values.to_vec()).unwrap()
}

#[test]
fn layer_is_tinted_and_premultiplied() {
    let m = map(&[1.0, 0.5]);
    let layer = make_layer(&m, &ColorSpec::name("r"), 0.5, false, &NamedColors).unwrap();
    assert_eq!(layer.alpha(), 0.5);
    assert_eq!(layer.color(), &ColorSpec::name("r"));
    assert_eq!(layer.image().pixel(0, 0), Some([0.5, 0.0, 0.0, 0.5]));
    assert_eq!(layer.image().pixel(1, 0), Some([0.25, 0.0, 0.0, 0.5]));
}

#[test]
fn straight_layer_keeps_full_color() {
    let m = map(&[1.0]);
    let layer = make_straight_layer(&m, &ColorSpec::name("b"), 0.25, false, &NamedColors).unwrap();
    assert_eq!(layer.image().pixel(0, 0), Some([0.0, 0.0, 1.0, 0.25]));
    let premul = layer.premultiply();
    assert_eq!(premul.image().pixel(0, 0), Some([0.0, 0.0, 0.25, 0.25]));
}

#[test]
fn normalize_divides_a_private_copy() {
    let m = map(&[2.0, 4.0]);
    let layer = make_layer(&m, &ColorSpec::name("w"), 1.0, true, &NamedColors).unwrap();
    assert_eq!(layer.image().pixel(0, 0), Some([0.5, 0.5, 0.5, 1.0]));
    assert_eq!(layer.image().pixel(1, 0), Some([1.0, 1.0, 1.0, 1.0]));
    assert_eq!(m.data(), &[2.0, 4.0]);
}

#[test]
fn normalizing_an_all_zero_map_is_degenerate() {
    let m = map(&[0.0, 0.0, 0.0]);
    assert!(matches!(
        make_layer(&m, &ColorSpec::name("r"), 1.0, true, &NamedColors),
        Err(BlendError::DegenerateInput(_))
    ));
    // without normalization an all-zero slice is fine
    assert!(make_layer(&m, &ColorSpec::name("r"), 1.0, false, &NamedColors).is_ok());
}

#[test]
fn normalizing_an_empty_map_is_degenerate() {
    let m = IntensityMap::filled(Dims::new(0, 0), 1.0).unwrap();
    assert!(matches!(
        make_layer(&m, &ColorSpec::name("r"), 1.0, true, &NamedColors),
        Err(BlendError::DegenerateInput(_))
    ));
}

#[test]
fn bad_alpha_and_color_are_rejected() {
    let m = map(&[1.0]);
    assert!(matches!(
        make_layer(&m, &ColorSpec::name("r"), 1.5, false, &NamedColors),
        Err(BlendError::InvalidAlpha { index: None, .. })
    ));
    assert!(matches!(
        make_layer(&m, &ColorSpec::name("nope"), 1.0, false, &NamedColors),
        Err(BlendError::InvalidColor(_))
    ));
}

#[test]
fn resolver_is_injected() {
    let m = map(&[1.0]);
    let teal = |_: &ColorSpec| -> BlendResult<crate::Rgb> { Ok(crate::Rgb::new(0.0, 0.5, 0.5)) };
    let layer = make_layer(&m, &ColorSpec::name("ignored"), 1.0, false, &teal).unwrap();
    assert_eq!(layer.image().pixel(0, 0), Some([0.0, 0.5, 0.5, 1.0]));
}

#[test]
fn standalone_alpha_error_names_no_layer_index() {
    let err = make_layer(&map(&[1.0]), &ColorSpec::name("r"), -0.5, false, &NamedColors)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invalid alpha -0.5"));
    assert!(!msg.contains("at layer"));
}
