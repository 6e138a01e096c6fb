use std::io::{Cursor, Write};

use assert_matches::assert_matches;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use geonames_city_export::archive::extract_member;
use geonames_city_export::error::ExportError;

fn two_member_zip() -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("cities5000.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"1\tParis\n").unwrap();
    writer
        .start_file("readme.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"ignore me").unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn extracts_the_named_member() {
    let temp = tempfile::tempdir().unwrap();
    let zip_path = temp.path().join("cities5000.zip");
    std::fs::write(&zip_path, two_member_zip()).unwrap();

    let content = extract_member(&zip_path, "cities5000.txt").unwrap();
    assert_eq!(content, b"1\tParis\n");
}

#[test]
fn missing_member_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let zip_path = temp.path().join("cities5000.zip");
    std::fs::write(&zip_path, two_member_zip()).unwrap();

    let err = extract_member(&zip_path, "cities15000.txt").unwrap_err();
    assert_matches!(err, ExportError::MissingMember(member) if member == "cities15000.txt");
}

#[test]
fn corrupt_archive_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let zip_path = temp.path().join("cities5000.zip");
    std::fs::write(&zip_path, b"this is not a zip file").unwrap();

    let err = extract_member(&zip_path, "cities5000.txt").unwrap_err();
    assert_matches!(err, ExportError::Archive(_));
}

#[test]
fn missing_archive_is_a_filesystem_error() {
    let temp = tempfile::tempdir().unwrap();
    let zip_path = temp.path().join("absent.zip");

    let err = extract_member(&zip_path, "cities5000.txt").unwrap_err();
    assert_matches!(err, ExportError::Filesystem(_));
}
