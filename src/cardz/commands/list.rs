use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::IndexCache;
use crate::store::TreeStore;

use super::helpers::load_for_read;

/// The whole forest, for rendering. Rendering everything is also the moment the
/// index gets refreshed, so searches that follow see exactly what was shown.
pub fn run<S: TreeStore>(store: &S, index: &mut IndexCache) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let forest = load_for_read(store, &mut result)?;
    index.rebuild(&forest);
    Ok(result.with_forest(forest))
}
