use crate::core::context::AppContext;
use crate::core::models::Item;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::scheduler::assembler::ScheduleResult;
use crate::scheduler::comparator::Candidate;
use crate::scheduler::policy::Placement;
use crate::scheduler::selector::{GreedySelector, SelectionObserver};
use std::collections::HashMap;

pub mod assembler;
pub mod comparator;
pub mod grid;
pub mod policy;
pub mod selector;
#[cfg(test)]
mod tests;

struct LoggerObserver {
    logger: Logger,
}

impl SelectionObserver for LoggerObserver {
    fn item_placed(&self, candidate: &Candidate<'_>, placement: &Placement) {
        self.logger.info(
            format!(
                "Item {} '{}' ({}, importance {:.2}) placed via {}",
                candidate.id,
                candidate.item.name,
                candidate.item.kind(),
                candidate.importance,
                placement
            ),
            LogTarget::FileOnly,
        );
    }

    fn item_rejected(&self, candidate: &Candidate<'_>) {
        self.logger.info(
            format!(
                "Item {} '{}' ({}, importance {:.2}) rejected: no conflict-free placement",
                candidate.id,
                candidate.item.name,
                candidate.item.kind(),
                candidate.importance
            ),
            LogTarget::FileOnly,
        );
    }
}

/// Runs the greedy selector with the context's template, default weight and
/// logger.
pub struct ScheduleManager<'a> {
    ctx: &'a AppContext,
    observer: LoggerObserver,
}

impl<'a> ScheduleManager<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        let observer = LoggerObserver {
            logger: ctx.logger.clone(),
        };
        Self { ctx, observer }
    }

    pub fn compute_schedule(
        &self,
        items: &[Item],
        overrides: &HashMap<String, f64>,
    ) -> Result<ScheduleResult> {
        self.ctx.logger.info(
            format!("Starting scheduling of {} items...", items.len()),
            LogTarget::FileOnly,
        );

        let mut unknown: Vec<&String> = overrides
            .keys()
            .filter(|name| !items.iter().any(|item| &item.name == *name))
            .collect();
        unknown.sort();
        for name in unknown {
            self.ctx.logger.warn(
                format!("Importance override for unknown item '{name}' ignored."),
                LogTarget::ConsoleAndFile,
            );
        }

        let selector = GreedySelector::new(self.ctx.config.grid_template())
            .with_default_importance(self.ctx.config.default_importance())
            .with_observer(&self.observer);

        let result = selector.run(items, overrides)?;

        self.ctx
            .logger
            .info(result.summary(), LogTarget::FileOnly);
        Ok(result)
    }
}
