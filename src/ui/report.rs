use crate::core::models::Item;
use crate::scheduler::assembler::ScheduleResult;
use crate::ui::table_printer::TablePrinter;
use std::io::{self, Write};

/// Plain-text rendering of a finished run.
#[derive(Debug, Clone)]
pub struct ReportPrinter {
    printer: TablePrinter,
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPrinter {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
        }
    }

    pub fn print(&self, items: &[Item], result: &ScheduleResult) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(items, result, &mut out)
    }

    pub fn render<W: Write + ?Sized>(
        &self,
        items: &[Item],
        result: &ScheduleResult,
        out: &mut W,
    ) -> io::Result<()> {
        let selected: Vec<Vec<String>> = result
            .selection
            .iter()
            .map(|s| {
                let kind = items
                    .get(s.item.0)
                    .map(|i| i.kind().to_string())
                    .unwrap_or_default();
                vec![
                    s.item.0.to_string(),
                    s.name.clone(),
                    kind,
                    format!("{:.2}", s.importance),
                    s.placement.to_string(),
                ]
            })
            .collect();
        self.printer.render_table(
            "Selected",
            &["ID", "NAME", "KIND", "IMPORTANCE", "VIA"],
            &selected,
            Some("Nothing could be scheduled."),
            out,
        )?;

        let placements: Vec<Vec<String>> = result
            .events
            .iter()
            .map(|e| {
                vec![
                    e.weekday.to_string(),
                    e.interval.to_string(),
                    e.name.clone(),
                    e.kind.to_string(),
                ]
            })
            .collect();
        self.printer.render_table(
            "Placements",
            &["DAY", "TIME", "NAME", "KIND"],
            &placements,
            Some("No placements."),
            out,
        )?;

        let rejected: Vec<Vec<String>> = result
            .rejected()
            .filter_map(|id| items.get(id.0).map(|item| (id, item)))
            .map(|(id, item)| vec![id.0.to_string(), item.name.clone(), item.kind().to_string()])
            .collect();
        self.printer.render_table(
            "Rejected",
            &["ID", "NAME", "KIND"],
            &rejected,
            Some("Every item was placed."),
            out,
        )?;

        writeln!(out, "{}", result.summary())
    }
}
