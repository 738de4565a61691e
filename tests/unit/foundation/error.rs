use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlendError::selection("x")
            .to_string()
            .contains("invalid selection:")
    );
    assert!(
        BlendError::degenerate("x")
            .to_string()
            .contains("degenerate input:")
    );
    assert!(BlendError::color("x").to_string().contains("invalid color:"));
    assert!(BlendError::shape("x").to_string().contains("shape mismatch:"));
    assert!(
        BlendError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BlendError::load("x").to_string().contains("load failure:"));
}

#[test]
fn count_mismatch_reports_both_sides() {
    let msg = BlendError::ColorCountMismatch {
        colors: 2,
        slices: 3,
    }
    .to_string();
    assert!(msg.contains("2 colors"));
    assert!(msg.contains("3 slices"));
}

#[test]
fn data_errors_are_told_apart_from_parameter_errors() {
    assert!(BlendError::degenerate("max is 0").is_data_error());
    assert!(BlendError::load("missing").is_data_error());
    assert!(!BlendError::selection("7 out of range").is_data_error());
    assert!(
        !BlendError::InvalidAlpha {
            index: Some(0),
            value: 2.0
        }
        .is_data_error()
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlendError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn alpha_message_mentions_layer_only_when_known() {
    let stacked = BlendError::InvalidAlpha {
        index: Some(3),
        value: 1.5,
    };
    assert!(stacked.to_string().contains("at layer 3"));
    let loose = BlendError::InvalidAlpha {
        index: None,
        value: 1.5,
    };
    assert_eq!(loose.to_string(), "invalid alpha 1.5: must be within [0, 1]");
}
