//! Sparse record of edits against the generated baseline.

use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};

use crate::voxels::{
    block::{BlockType, BlockTypeSize},
    world::VoxelWorld,
};

/// The cells whose current value differs from what generation produced.
///
/// The baseline of a cell is captured the first time it is written through
/// [`WorldDiff::set_block_tracked`]. Writing the baseline value back removes
/// the entry and forgets the baseline, so the diff only ever holds real edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldDiff {
    changes: BTreeMap<usize, BlockTypeSize>,
    baselines: HashMap<usize, BlockTypeSize>,
}

impl WorldDiff {
    /// Creates an empty diff.
    pub fn new() -> Self {
        WorldDiff::default()
    }

    /// Number of edited cells.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if nothing differs from the baseline.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// The edited value at an index, if any.
    pub fn get(&self, index: usize) -> Option<BlockType> {
        self.changes.get(&index).map(|&b| BlockType::from_stored(b))
    }

    /// Writes a block and records the edit.
    ///
    /// Returns false, changing nothing, when the coordinate is off the grid.
    pub fn set_block_tracked(&mut self, world: &mut VoxelWorld, x: i32, y: i32, z: i32, block: BlockType) -> bool {
        let Some(index) = world.index(x, y, z) else {
            return false;
        };
        let current = world.get(x, y, z).id();
        let baseline = *self.baselines.entry(index).or_insert(current);

        world.set(x, y, z, block);
        if block.id() == baseline {
            self.changes.remove(&index);
            self.baselines.remove(&index);
        } else {
            self.changes.insert(index, block.id());
        }
        true
    }

    /// The edits as `(index, block)` pairs, sorted by index.
    pub fn entries(&self) -> Vec<(usize, BlockTypeSize)> {
        self.changes.iter().map(|(&i, &b)| (i, b)).collect()
    }

    /// Applies saved edits to a freshly generated world.
    ///
    /// Indices past the end of the grid and unknown block ids are skipped.
    /// The generated value of each cell becomes its baseline, so reverting an
    /// edit later drops it from the diff. Returns the number applied.
    pub fn replay(&mut self, world: &mut VoxelWorld, entries: &[(usize, BlockTypeSize)]) -> usize {
        let mut applied = 0;
        for &(index, id) in entries {
            let (Some(p), Some(block)) = (world.coordinates_of(index), BlockType::from_id(id)) else {
                warn!("Skipping invalid change {} -> {}", index, id);
                continue;
            };
            if self.set_block_tracked(world, p.x, p.y, p.z, block) {
                applied += 1;
            }
        }
        debug!("Replayed {} of {} changes", applied, entries.len());
        applied
    }
}
