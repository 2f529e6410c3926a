use std::path::PathBuf;

use crate::record::{GeoPoint, RecordStore};
use crate::render::{Renderer, SvgHistogram, SvgMap};

/// Everything a command runs against.
///
/// The environment contains:
/// - `store`: the dataset, loaded once and never modified.
/// - `output_dir`: where the visualization commands write their images.
/// - `histogram` / `map`: renderers used by those commands.
/// - `should_exit`: a flag the loop checks to know when to terminate.
pub struct Environment {
    pub store: RecordStore,
    pub output_dir: PathBuf,
    pub histogram: Box<dyn Renderer<f64>>,
    pub map: Box<dyn Renderer<GeoPoint>>,
    pub should_exit: bool,
}

impl Environment {
    /// Environment with the SVG renderers.
    pub fn new(store: RecordStore, output_dir: impl Into<PathBuf>, bins: usize) -> Self {
        Self::with_renderers(
            store,
            output_dir,
            Box::new(SvgHistogram { bins }),
            Box::new(SvgMap),
        )
    }

    pub fn with_renderers(
        store: RecordStore,
        output_dir: impl Into<PathBuf>,
        histogram: Box<dyn Renderer<f64>>,
        map: Box<dyn Renderer<GeoPoint>>,
    ) -> Self {
        Self {
            store,
            output_dir: output_dir.into(),
            histogram,
            map,
            should_exit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ShipRecord;

    #[test]
    fn test_new_environment_is_running() {
        let store = RecordStore::new(vec![ShipRecord::new("Alpha", "US", "Cargo")]);
        let env = Environment::new(store, "/tmp", 10);
        assert!(!env.should_exit);
        assert_eq!(env.store.len(), 1);
        assert_eq!(env.output_dir, PathBuf::from("/tmp"));
    }
}
