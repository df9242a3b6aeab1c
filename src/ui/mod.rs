pub mod report;
mod table_printer;
mod width_util;
