pub mod excel_write;
