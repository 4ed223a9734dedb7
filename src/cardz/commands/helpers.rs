use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IndexCache;
use crate::model::Forest;
use crate::store::{LoadOrigin, TreeStore};

/// Loads the forest for reading. An unreadable store yields the empty forest
/// plus a warning on `result`.
pub fn load_for_read<S: TreeStore>(store: &S, result: &mut CmdResult) -> Result<Forest> {
    let loaded = store.load()?;
    if let LoadOrigin::Corrupt(reason) = &loaded.origin {
        result.add_message(CmdMessage::warning(format!(
            "Card store at {} could not be read ({}); showing an empty tree.",
            store.location(),
            reason
        )));
    }
    Ok(loaded.forest)
}

/// Loads the forest for a read-modify-write cycle. Fails on an unreadable store.
pub fn load_for_write<S: TreeStore>(store: &S) -> Result<Forest> {
    store.load()?.into_writable(&store.location())
}

/// Persists `forest` and brings the index in line with it.
pub fn commit<S: TreeStore>(store: &mut S, index: &mut IndexCache, forest: &Forest) -> Result<()> {
    store.save(forest)?;
    index.rebuild(forest);
    Ok(())
}
