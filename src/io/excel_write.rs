use std::path::Path;

use rust_xlsxwriter::{Formula, Table, Workbook};

use crate::error::Result;
use crate::model::OutputRow;

/// Name of the single worksheet in the report.
pub const SHEET_NAME: &str = "APs";

/// Name of the Excel table laid over the rows.
pub const TABLE_NAME: &str = "APTable";

/// Header row, in column order. The last column holds a formula that builds
/// the Teams provisioning command from the cells to its left.
pub const COLUMNS: [&str; 8] = [
    "Name",
    "Model",
    "BSSID",
    "SSID",
    "Band",
    "Channel",
    "TeamsLocationID",
    "POWERSHELL",
];

/// Writes the report workbook to `path`: one sheet, one header row, one row
/// per broadcast identifier, wrapped in an autofiltered table. With no rows
/// the workbook still gets its headers so the artifact opens cleanly.
pub fn write_report(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col_idx, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, *header)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        worksheet.write_string(excel_row, 0, &row.name)?;
        worksheet.write_string(excel_row, 1, &row.model)?;
        worksheet.write_string(excel_row, 2, &row.bssid)?;
        worksheet.write_string(excel_row, 3, &row.ssid)?;
        worksheet.write_string(excel_row, 4, &row.band)?;
        if let Some(channel) = row.channel {
            worksheet.write_number(excel_row, 5, f64::from(channel))?;
        }
        worksheet.write_string(excel_row, 6, &row.location_id)?;

        // The stored result keeps the command readable in tools that do not
        // evaluate formulas.
        let formula = Formula::new(powershell_formula(excel_row + 1))
            .set_result(powershell_command(row));
        worksheet.write_formula(excel_row, 7, formula)?;
    }

    if !rows.is_empty() {
        let mut table = Table::new();
        table.set_name(TABLE_NAME).set_autofilter(true);
        let row_end = rows.len() as u32;
        let col_end = (COLUMNS.len() as u16) - 1;
        worksheet.add_table(0, 0, row_end, col_end, &table)?;
    }

    worksheet.autofit();
    workbook.save(path)?;
    Ok(())
}

/// The provisioning command for one row, ready to paste into a Teams
/// PowerShell session once the location placeholder has been replaced.
pub fn powershell_command(row: &OutputRow) -> String {
    format!(
        "set-CsOnlineLisWirelessAccessPoint -BSSID '{}' -Description '{} {} {} {}' -LocationID '{}'",
        row.bssid, row.name, row.model, row.ssid, row.band, row.location_id
    )
}

/// Concatenation formula producing the same command from the cells of the
/// 1-based worksheet row `excel_row`, so edits to the sheet flow into the
/// command column.
fn powershell_formula(excel_row: u32) -> String {
    let r = excel_row;
    format!(
        "=\"set-CsOnlineLisWirelessAccessPoint -BSSID '\"&C{r}&\"' -Description '\"&A{r}&\" \"&B{r}&\" \"&D{r}&\" \"&E{r}&\"' -LocationID '\"&G{r}&\"'\""
    )
}
