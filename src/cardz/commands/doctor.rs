use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IndexCache;
use crate::store::TreeStore;
use crate::tree;

use super::helpers::{commit, load_for_write};

/// Report from the `doctor` operation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DoctorReport {
    pub cards: usize,
    pub fixed_parent_ids: usize,
    pub duplicate_ids: Vec<u64>,
}

pub fn check<S: TreeStore>(store: &mut S, index: &mut IndexCache) -> Result<DoctorReport> {
    let mut forest = load_for_write(store)?;

    let report = DoctorReport {
        cards: tree::count(&forest.cards),
        fixed_parent_ids: tree::sync_parent_ids(&mut forest.cards, None),
        duplicate_ids: tree::duplicate_ids(&forest.cards),
    };

    if report.fixed_parent_ids > 0 {
        commit(store, index, &forest)?;
    }
    Ok(report)
}

pub fn run<S: TreeStore>(store: &mut S, index: &mut IndexCache) -> Result<CmdResult> {
    let report = check(store, index)?;
    let mut result = CmdResult::default();

    if report.fixed_parent_ids == 0 && report.duplicate_ids.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "No inconsistencies found ({} card(s) checked).",
            report.cards
        )));
        return Ok(result);
    }

    if report.fixed_parent_ids > 0 {
        result.add_message(CmdMessage::warning("Inconsistencies found and fixed:"));
        result.add_message(CmdMessage::info(format!(
            "  - Corrected parent_id on {} card(s).",
            report.fixed_parent_ids
        )));
    }
    if !report.duplicate_ids.is_empty() {
        let ids: Vec<String> = report.duplicate_ids.iter().map(|id| id.to_string()).collect();
        result.add_message(CmdMessage::error(format!(
            "Duplicate card ids (fix by hand): {}",
            ids.join(", ")
        )));
    }

    Ok(result)
}
