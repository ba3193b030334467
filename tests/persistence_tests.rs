/// Integration tests for world-diff persistence
/// These tests validate that a saved world reloads cell for cell
use std::io::{self, Write};

use cgmath::Point3;
use voxel_sandbox::{
    persistence::{SaveData, SaveError, WorldDiff},
    voxels::{block::BlockType, generation::GenerationConfig, world::VoxelWorld},
};

const SX: i32 = 48;
const SY: i32 = 40;
const SZ: i32 = 48;

fn edited_world() -> (VoxelWorld, WorldDiff) {
    let mut world = VoxelWorld::new(SX, SY, SZ, 4242);
    world.generate();
    let mut diff = WorldDiff::new();

    let top = world.highest_solid_y(20, 20);
    diff.set_block_tracked(&mut world, 20, top, 20, BlockType::AIR);
    diff.set_block_tracked(&mut world, 21, top + 3, 20, BlockType::BRICK);
    diff.set_block_tracked(&mut world, 5, 1, 5, BlockType::DIAMOND_ORE);
    (world, diff)
}

#[test]
fn test_round_trip_restores_every_cell() {
    let (world, diff) = edited_world();
    let json = SaveData::capture(&world, &diff, Some(Point3::new(20.5, 30.0, 20.5)))
        .to_json_string()
        .unwrap();

    let save = SaveData::from_json_str(&json).unwrap();
    assert_eq!(save.seed, 4242);
    assert_eq!(save.player.map(Point3::<f32>::from), Some(Point3::new(20.5, 30.0, 20.5)));

    let (restored, restored_diff) = save.restore(SX, SY, SZ, &GenerationConfig::default());
    assert_eq!(restored.blocks(), world.blocks());
    assert_eq!(restored_diff.entries(), diff.entries());
}

#[test]
fn test_reverted_edits_are_not_saved() {
    let (mut world, mut diff) = edited_world();
    let edits = diff.len();

    let mut fresh = VoxelWorld::new(SX, SY, SZ, 4242);
    fresh.generate();
    let top = fresh.highest_solid_y(20, 20);
    diff.set_block_tracked(&mut world, 20, top, 20, fresh.get(20, top, 20));

    assert_eq!(SaveData::capture(&world, &diff, None).changes.len(), edits - 1);
    assert_eq!(world.get(20, top, 20), fresh.get(20, top, 20));
}

#[test]
fn test_reader_and_writer_helpers() {
    let (world, diff) = edited_world();
    let save = SaveData::capture(&world, &diff, None);

    let mut buffer = Vec::new();
    save.write_to(&mut buffer).unwrap();
    let read = SaveData::read_from(buffer.as_slice()).unwrap();
    assert_eq!(read, save);
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_writer_failures_are_io_errors() {
    let (world, diff) = edited_world();
    let err = SaveData::capture(&world, &diff, None).write_to(BrokenPipe).unwrap_err();
    assert!(matches!(err, SaveError::Io(_)));
}

#[test]
fn test_malformed_payloads_are_rejected() {
    for json in ["not json", r#"{"version":1,"seed":1}"#, r#"{"version":1,"seed":"x","changes":[]}"#] {
        assert!(SaveData::from_json_str(json).is_err(), "{}", json);
    }
}

#[test]
fn test_invalid_changes_are_skipped_on_restore() {
    let json = r#"{"version":1,"seed":8,"changes":[[999999999,3],[12,200],[100,10]]}"#;
    let save = SaveData::from_json_str(json).unwrap();
    let (world, diff) = save.restore(16, 16, 16, &GenerationConfig::default());

    assert_eq!(world.get_index(100), Some(BlockType::BRICK));
    assert_eq!(diff.len(), 1);
}
