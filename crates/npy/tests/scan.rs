//! Integration tests for loading arrays and scanning folders

use seistools_npy::{read_npy, scan_folder, Error, NpyData};

use rstest::{fixture, rstest};
use std::path::Path;
use tempfile::TempDir;

/// Minimal version 1.0 file
fn npy_v1(descr: &str, shape: &str, data: &[u8]) -> Vec<u8> {
    let mut dict = format!("{{'descr': '{descr}', 'fortran_order': False, 'shape': {shape}, }}");
    // numpy pads the preamble and header to a multiple of 64 bytes
    while (10 + dict.len() + 1) % 64 != 0 {
        dict.push(' ');
    }
    dict.push('\n');

    let mut bytes = b"\x93NUMPY\x01\x00".to_vec();
    bytes.extend((dict.len() as u16).to_le_bytes());
    bytes.extend(dict.as_bytes());
    bytes.extend(data);
    bytes
}

/// Minimal version 2.0 file
fn npy_v2(descr: &str, shape: &str, data: &[u8]) -> Vec<u8> {
    let dict = format!("{{'descr': '{descr}', 'fortran_order': False, 'shape': {shape}, }}\n");
    let mut bytes = b"\x93NUMPY\x02\x00".to_vec();
    bytes.extend((dict.len() as u32).to_le_bytes());
    bytes.extend(dict.as_bytes());
    bytes.extend(data);
    bytes
}

fn f64_bytes(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn write(dir: &Path, name: &str, bytes: &[u8]) {
    std::fs::write(dir.join(name), bytes).unwrap();
}

#[fixture]
fn folder() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();

    write(path, "b_varying.npy", &npy_v1("<f8", "(2, 2)", &f64_bytes(&[0.0, 1.0, 2.0, 1.0])));
    write(path, "a_constant.npy", &npy_v1("<f8", "(3,)", &f64_bytes(&[4.5, 4.5, 4.5])));
    write(path, "c_zeros.npy", &npy_v1("<f8", "(2,)", &f64_bytes(&[0.0, -0.0])));
    write(path, "d_nans.npy", &npy_v1("<f8", "(2,)", &f64_bytes(&[f64::NAN, -f64::NAN])));
    write(path, "e_mask.npy", &npy_v2("|b1", "(4,)", &[0, 0, 1, 0]));
    write(path, "f_empty.npy", &npy_v1("<i4", "(0,)", &[]));
    write(path, "g_broken.npy", b"definitely not numpy");
    write(path, "h_oversized.npy", &npy_v1("|u1", "(9223372036854775808, 2)", &[]));
    write(path, "notes.txt", b"ignored");

    dir
}

#[rstest]
fn scan_partitions_arrays(folder: TempDir) {
    let report = scan_folder(folder.path()).unwrap();

    assert_eq!(report.file_count(), 8);
    assert_eq!(report.informative_files(), vec!["b_varying.npy", "e_mask.npy"]);
    assert_eq!(report.informative[0].distinct, 3);
    assert_eq!(report.informative[0].shape, vec![2, 2]);

    let degenerate = report
        .degenerate
        .iter()
        .map(|a| a.file.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(
        degenerate,
        vec!["a_constant.npy", "c_zeros.npy", "d_nans.npy", "f_empty.npy"]
    );
    assert_eq!(report.degenerate[0].value.as_deref(), Some("4.5"));
    assert_eq!(report.degenerate[3].value, None);

    // a corrupt shape is a failure, never a degenerate empty array
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].file, "g_broken.npy");
    assert_eq!(report.failures[1].file, "h_oversized.npy");
    assert!(report.failures[1].reason.contains("invalid .npy header"));
}

#[rstest]
fn scan_report_json(folder: TempDir) {
    let report = scan_folder(folder.path()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["informative"][0]["file"], "b_varying.npy");
    assert_eq!(json["informative"][0]["dtype"], "<f8");
    assert_eq!(json["degenerate"].as_array().unwrap().len(), 4);
    assert_eq!(json["failures"][0]["file"], "g_broken.npy");
}

#[rstest]
fn scan_missing_folder() {
    let dir = tempfile::tempdir().unwrap();
    let result = scan_folder(dir.path().join("nope"));
    assert!(matches!(result, Err(Error::FolderNotFound(_))));
}

#[rstest]
fn scan_empty_folder() {
    let dir = tempfile::tempdir().unwrap();
    let report = scan_folder(dir.path()).unwrap();
    assert_eq!(report.file_count(), 0);
}

#[rstest]
#[case("<i2", vec![1, 0, 0xff, 0xff], NpyData::I16(vec![1, -1]))]
#[case(">i2", vec![0, 1, 0xff, 0xff], NpyData::I16(vec![1, -1]))]
#[case("<u8", 9u64.to_le_bytes().to_vec(), NpyData::U64(vec![9]))]
#[case(">f4", 0.5f32.to_be_bytes().to_vec(), NpyData::F32(vec![0.5]))]
#[case("|u1", vec![200], NpyData::U8(vec![200]))]
fn read_dtypes(#[case] descr: &str, #[case] data: Vec<u8>, #[case] expected: NpyData) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("array.npy");
    let n = expected.len();
    std::fs::write(&path, npy_v1(descr, &format!("({n},)"), &data)).unwrap();

    let array = read_npy(&path).unwrap();
    assert_eq!(array.data, expected);
    assert_eq!(array.shape, vec![n]);
}
