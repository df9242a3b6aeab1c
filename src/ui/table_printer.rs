use crate::ui::width_util::WidthUtil;
use std::io::Write;

const COLUMN_GAP: &str = " | ";

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Banner, header, rows, closing rule. With no rows and an
    /// `empty_message`, the message replaces the header and rows.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let col_widths = self.compute_col_widths(headers, rows);
        let width = self
            .natural_width(&col_widths)
            .max(self.util.visible_width(table_name));

        if rows.is_empty() {
            if let Some(msg) = empty_message {
                let width = width.max(self.util.visible_width(msg));
                self.write_banner(out, table_name, width)?;
                writeln!(out, "{msg}")?;
                return self.write_rule(out, width);
            }
        }

        self.write_banner(out, table_name, width)?;
        writeln!(out, "{}", self.build_line(headers, &col_widths))?;
        self.write_rule(out, width)?;
        for row in rows {
            writeln!(out, "{}", self.build_line(row, &col_widths))?;
        }
        self.write_rule(out, width)
    }

    fn compute_col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut col_widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(col_widths.len()) {
                col_widths[i] = col_widths[i].max(self.util.visible_width(cell.as_ref()));
            }
        }
        col_widths
    }

    fn natural_width(&self, col_widths: &[usize]) -> usize {
        if col_widths.is_empty() {
            0
        } else {
            col_widths.iter().sum::<usize>() + (col_widths.len() - 1) * COLUMN_GAP.len()
        }
    }

    fn build_line<T: AsRef<str>>(&self, cells: &[T], col_widths: &[usize]) -> String {
        let line = cells
            .iter()
            .zip(col_widths)
            .map(|(cell, w)| self.util.pad_visible(cell.as_ref(), *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        line.trim_end().to_string()
    }

    fn write_banner<W: Write + ?Sized>(
        &self,
        out: &mut W,
        table_name: &str,
        width: usize,
    ) -> std::io::Result<()> {
        self.write_rule(out, width)?;
        writeln!(out, "{}", table_name.to_uppercase())?;
        self.write_rule(out, width)
    }

    fn write_rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        writeln!(out, "{}", "-".repeat(self.util.rule_width(width)))
    }
}
