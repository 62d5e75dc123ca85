#![cfg(not(target_arch = "wasm32"))]

use ui::core::sample;
use ui::export::{export_publications, ExportDirectory, HEADER};

#[test]
fn sample_export_lands_on_disk_with_expected_shape() {
    let tmp = tempfile::tempdir().unwrap();
    let target = ExportDirectory::new(tmp.path());

    let name = export_publications("Jone Mickel", &sample::publications(), &target).unwrap();
    assert_eq!(name, "Jone Mickel_publications.csv");

    let content = std::fs::read_to_string(tmp.path().join(&name)).unwrap();
    let lines: Vec<&str> = content.split('\n').collect();
    assert_eq!(
        lines[0],
        "Title,Fields,Authors,Total Self Citations,Published Year,Total Citations"
    );
    assert_eq!(lines[0], HEADER.join(","));
    assert_eq!(lines.len(), 4);
    for row in &lines[1..] {
        assert!(row.starts_with("\"Title of Publication\","));
        assert!(row.ends_with(",250,250,250"));
    }
}
