use super::*;
use crate::source::json::CubeDocument;

#[test]
fn dispatches_on_extension() {
    let dir = std::path::PathBuf::from("target").join("unit_loader");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cube.JSON");
    let doc = CubeDocument {
        shape: [1, 1, 3],
        data: vec![0.0, 0.5, 1.0],
    };
    std::fs::write(&path, serde_json::to_vec(&doc).unwrap()).unwrap();

    let cube = load_cube(&path).unwrap();
    assert_eq!(cube.shape(), (1, 1, 3));
}

#[test]
fn unknown_extension_is_a_load_failure() {
    let err = load_cube(Path::new("cube.hdf5")).unwrap_err();
    assert!(matches!(err, BlendError::Load(_)));
    assert!(err.is_data_error());
}

#[test]
fn missing_file_is_a_load_failure() {
    assert!(matches!(
        load_cube(Path::new("target/does-not-exist.fits")),
        Err(BlendError::Load(_))
    ));
}
