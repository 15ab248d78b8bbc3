use calamine::{DataType, Reader, Xlsx, open_workbook};
use meraki_bssid_export::export;
use meraki_bssid_export::io::excel_write::{self, COLUMNS, SHEET_NAME};
use meraki_bssid_export::model::{LOCATION_ID_PLACEHOLDER, OutputRow};
use tempfile::tempdir;

fn row(
    name: &str,
    model: &str,
    bssid: &str,
    ssid: &str,
    band: &str,
    channel: Option<u16>,
) -> OutputRow {
    OutputRow {
        name: name.to_string(),
        model: model.to_string(),
        bssid: bssid.to_string(),
        ssid: ssid.to_string(),
        band: band.to_string(),
        channel,
        location_id: LOCATION_ID_PLACEHOLDER.to_string(),
    }
}

fn read_sheet(path: &std::path::Path) -> calamine::Range<DataType> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook opened");
    workbook
        .worksheet_range(SHEET_NAME)
        .expect("sheet present")
        .expect("sheet read")
}

fn cell_string(range: &calamine::Range<DataType>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(DataType::String(value)) => value.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[test]
fn written_report_survives_a_readback() {
    let rows = vec![
        row(
            "AP-US-01",
            "MR36",
            "AA-BB-CC-DD-EE-FF",
            "Corp",
            "2.4",
            Some(6),
        ),
        row("AP-US-02", "MR46", "AA-BB-CC-DD-EE-00", "Guest", "5", None),
    ];

    let temp_dir = tempdir().expect("temporary directory");
    let xlsx_path = temp_dir.path().join("report.xlsx");
    excel_write::write_report(&xlsx_path, &rows).expect("report written");

    let range = read_sheet(&xlsx_path);
    assert_eq!(range.height(), 3);

    for (col, header) in COLUMNS.iter().enumerate() {
        assert_eq!(cell_string(&range, 0, col as u32), *header);
    }

    assert_eq!(cell_string(&range, 1, 0), "AP-US-01");
    assert_eq!(cell_string(&range, 1, 1), "MR36");
    assert_eq!(cell_string(&range, 1, 2), "AA-BB-CC-DD-EE-FF");
    assert_eq!(cell_string(&range, 1, 3), "Corp");
    assert_eq!(cell_string(&range, 1, 4), "2.4");
    match range.get_value((1, 5)) {
        Some(DataType::Float(value)) => assert_eq!(*value, 6.0),
        other => panic!("channel cell should hold a number, got {other:?}"),
    }
    assert_eq!(cell_string(&range, 1, 6), LOCATION_ID_PLACEHOLDER);

    assert_eq!(cell_string(&range, 2, 3), "Guest");
    match range.get_value((2, 5)) {
        Some(DataType::Empty) | None => {}
        other => panic!("missing channel should leave the cell empty, got {other:?}"),
    }
}

#[test]
fn command_column_carries_the_provisioning_command() {
    let rows = vec![row(
        "AP-US-01",
        "MR36",
        "AA-BB-CC-DD-EE-FF",
        "Corp",
        "2.4",
        Some(6),
    )];

    let temp_dir = tempdir().expect("temporary directory");
    let xlsx_path = temp_dir.path().join("report.xlsx");
    excel_write::write_report(&xlsx_path, &rows).expect("report written");

    let range = read_sheet(&xlsx_path);
    assert_eq!(
        cell_string(&range, 1, 7),
        "set-CsOnlineLisWirelessAccessPoint -BSSID 'AA-BB-CC-DD-EE-FF' \
         -Description 'AP-US-01 MR36 Corp 2.4' -LocationID 'ENTER LOCATION ID HERE'"
    );
}

#[test]
fn empty_report_still_opens_with_headers() {
    let temp_dir = tempdir().expect("temporary directory");
    let xlsx_path = temp_dir.path().join("report.xlsx");
    excel_write::write_report(&xlsx_path, &[]).expect("report written");

    let range = read_sheet(&xlsx_path);
    assert_eq!(range.height(), 1);
    for (col, header) in COLUMNS.iter().enumerate() {
        assert_eq!(cell_string(&range, 0, col as u32), *header);
    }
}

#[test]
fn export_names_the_file_by_timestamp() {
    let rows = vec![row(
        "AP-US-01",
        "MR36",
        "AA-BB-CC-DD-EE-FF",
        "Corp",
        "2.4",
        Some(6),
    )];

    let temp_dir = tempdir().expect("temporary directory");
    let path = export::export_report(&rows, temp_dir.path()).expect("report exported");
    assert!(path.exists());

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .expect("file name is valid UTF-8");
    assert!(file_name.starts_with("MerakiBSSIDs_"));
    assert!(file_name.ends_with(".xlsx"));

    let stamp = &file_name["MerakiBSSIDs_".len()..file_name.len() - ".xlsx".len()];
    assert_eq!(stamp.len(), 15);
    for (index, ch) in stamp.chars().enumerate() {
        if index == 8 {
            assert_eq!(ch, '_');
        } else {
            assert!(ch.is_ascii_digit(), "unexpected character in {file_name}");
        }
    }
}
