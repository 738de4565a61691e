use super::*;
use crate::foundation::core::Dims;

fn labeled_cube(slices: usize) -> Cube {
    // every pixel of slice s holds the value s
    let data = (0..slices)
        .flat_map(|s| std::iter::repeat_n(s as f64, 4))
        .collect();
    Cube::new(slices, Dims::new(2, 2), data).unwrap()
}

fn labels(c: &Cube) -> Vec<f64> {
    c.iter_slices().map(|s| s[0]).collect()
}

#[test]
fn select_all_keeps_natural_order() {
    let c = labeled_cube(4);
    let out = Stack::select(&c, &Selection::All).unwrap();
    assert_eq!(out, c);
}

#[test]
fn select_respects_explicit_order() {
    let c = labeled_cube(9);
    let out = Stack::select(&c, &Selection::from(vec![5, 0, 8])).unwrap();
    assert_eq!(out.shape(), (3, 2, 2));
    assert_eq!(labels(&out), vec![5.0, 0.0, 8.0]);
}

#[test]
fn select_single_keeps_slice_axis() {
    let c = labeled_cube(3);
    let out = Stack::select(&c, &Selection::Single(2)).unwrap();
    assert_eq!(out.shape(), (1, 2, 2));
    assert_eq!(labels(&out), vec![2.0]);
}

#[test]
fn select_keeps_duplicates() {
    let c = labeled_cube(3);
    let out = Stack::select(&c, &Selection::from(vec![1, 1, 0])).unwrap();
    assert_eq!(labels(&out), vec![1.0, 1.0, 0.0]);
}

#[test]
fn select_out_of_range_is_invalid_selection() {
    let c = labeled_cube(3);
    for sel in [Selection::Single(3), Selection::from(vec![0, 7])] {
        assert!(matches!(
            Stack::select(&c, &sel),
            Err(BlendError::InvalidSelection(_))
        ));
    }
}

#[test]
fn select_does_not_touch_source() {
    let c = labeled_cube(3);
    let before = c.clone();
    let _ = Stack::select(&c, &Selection::from(vec![2, 1])).unwrap();
    assert_eq!(c, before);
}

#[test]
fn from_json_accepts_null_int_and_array() {
    assert_eq!(
        Selection::from_json(&serde_json::json!(null)).unwrap(),
        Selection::All
    );
    assert_eq!(
        Selection::from_json(&serde_json::json!(4)).unwrap(),
        Selection::Single(4)
    );
    assert_eq!(
        Selection::from_json(&serde_json::json!([2, 0])).unwrap(),
        Selection::Indices(vec![2, 0])
    );
}

#[test]
fn from_json_rejects_malformed_values() {
    for bad in [
        serde_json::json!("0,1"),
        serde_json::json!(-1),
        serde_json::json!(1.5),
        serde_json::json!([0, "1"]),
        serde_json::json!([[0]]),
        serde_json::json!({"slices": [0]}),
        serde_json::json!(true),
    ] {
        assert!(
            matches!(
                Selection::from_json(&bad),
                Err(BlendError::InvalidSelection(_))
            ),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn deserialize_goes_through_from_json() {
    let s: Selection = serde_json::from_str("[3, 1]").unwrap();
    assert_eq!(s, Selection::Indices(vec![3, 1]));
    assert!(serde_json::from_str::<Selection>("\"all\"").is_err());
}

#[test]
fn parses_cli_lists() {
    assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
    assert_eq!("".parse::<Selection>().unwrap(), Selection::All);
    assert_eq!("2".parse::<Selection>().unwrap(), Selection::Single(2));
    assert_eq!(
        "5, 0,8".parse::<Selection>().unwrap(),
        Selection::Indices(vec![5, 0, 8])
    );
    assert!(matches!(
        "1,x".parse::<Selection>(),
        Err(BlendError::InvalidSelection(_))
    ));
}
