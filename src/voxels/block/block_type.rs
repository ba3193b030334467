//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides functionality for block type identification, conversion, and the
//! material properties that generation, collision and mining depend on.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// The numeric value of each variant is the byte stored in the world grid and in
/// save diffs. `AIR` (0) is the universal empty value; no other ordinal meaning
/// exists. The `FromPrimitive` derive allows conversion from the stored byte.
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Empty space. Non-solid and never rendered.
    AIR = 0,

    /// Grass-topped soil, the surface of plains and forests.
    GRASS = 1,

    /// Plain soil found just beneath the surface.
    DIRT = 2,

    /// The bulk of the underground.
    STONE = 3,

    /// Tree trunks and house corner posts.
    WOOD = 4,

    /// Tree canopies.
    LEAVES = 5,

    /// Indestructible world floor and border walls.
    BEDROCK = 6,

    /// House roofs.
    PLANKS = 7,

    /// Banding near the stone line and house floors.
    COBBLESTONE = 8,

    /// Desert, beach and sea floor surface.
    SAND = 9,

    /// House walls.
    BRICK = 10,

    /// House windows.
    GLASS = 11,

    /// The most common ore, found at mid depth.
    SLIVER_ORE = 12,

    /// A deeper, rarer ore.
    RUBY_ORE = 13,

    /// Ore found in the lower half of the world.
    GOLD_ORE = 14,

    /// Ore found in the lower third of the world.
    SAPPHIRE_ORE = 15,

    /// The rarest ore, found near bedrock.
    DIAMOND_ORE = 16,

    /// Sea water. Rendered, but passable.
    WATER = 17,
}

impl BlockType {
    /// Every block type, in id order.
    pub const ALL: [BlockType; 18] = [
        BlockType::AIR,
        BlockType::GRASS,
        BlockType::DIRT,
        BlockType::STONE,
        BlockType::WOOD,
        BlockType::LEAVES,
        BlockType::BEDROCK,
        BlockType::PLANKS,
        BlockType::COBBLESTONE,
        BlockType::SAND,
        BlockType::BRICK,
        BlockType::GLASS,
        BlockType::SLIVER_ORE,
        BlockType::RUBY_ORE,
        BlockType::GOLD_ORE,
        BlockType::SAPPHIRE_ORE,
        BlockType::DIAMOND_ORE,
        BlockType::WATER,
    ];

    /// Converts a stored `BlockTypeSize` to a `BlockType`.
    ///
    /// Returns `None` for bytes that do not name a block, which can only happen
    /// with foreign data such as a hand-edited save file.
    pub fn from_id(id: BlockTypeSize) -> Option<Self> {
        FromPrimitive::from_u8(id)
    }

    /// Converts a byte read from the world grid.
    ///
    /// The grid only ever stores valid ids, so unknown bytes fall back to `AIR`.
    pub fn from_stored(id: BlockTypeSize) -> Self {
        Self::from_id(id).unwrap_or(BlockType::AIR)
    }

    /// The byte stored in the grid for this block.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Returns true for the empty block.
    pub fn is_air(self) -> bool {
        self == BlockType::AIR
    }

    /// Returns true for blocks that stop movement and occlude neighbouring faces.
    ///
    /// Water is non-empty but passable, so solidity and "non-air" differ for it.
    pub fn is_solid(self) -> bool {
        !matches!(self, BlockType::AIR | BlockType::WATER)
    }

    /// Returns true for passable blocks that are still rendered.
    pub fn is_liquid(self) -> bool {
        self == BlockType::WATER
    }

    /// Returns true for every ore tier.
    pub fn is_ore(self) -> bool {
        matches!(
            self,
            BlockType::SLIVER_ORE
                | BlockType::RUBY_ORE
                | BlockType::GOLD_ORE
                | BlockType::SAPPHIRE_ORE
                | BlockType::DIAMOND_ORE
        )
    }

    /// Returns true for the host rock an ore vein may replace.
    pub fn is_replaceable_by_ore(self) -> bool {
        matches!(self, BlockType::STONE | BlockType::COBBLESTONE)
    }

    /// Returns true if a player may mine this block at all.
    pub fn is_breakable(self) -> bool {
        !matches!(self, BlockType::AIR | BlockType::BEDROCK | BlockType::WATER)
    }

    /// Returns true if a player may place this block.
    pub fn is_placeable(self) -> bool {
        !matches!(self, BlockType::AIR | BlockType::BEDROCK | BlockType::WATER)
    }

    /// Mining effort needed to break the block.
    pub fn hardness(self) -> f32 {
        match self {
            BlockType::GRASS
            | BlockType::DIRT
            | BlockType::SAND
            | BlockType::LEAVES
            | BlockType::GLASS => 2.0,
            BlockType::WOOD | BlockType::PLANKS => 3.0,
            BlockType::STONE | BlockType::COBBLESTONE | BlockType::BRICK => 5.0,
            BlockType::SLIVER_ORE => 7.0,
            BlockType::RUBY_ORE => 9.0,
            BlockType::GOLD_ORE => 11.0,
            BlockType::SAPPHIRE_ORE => 12.0,
            BlockType::DIAMOND_ORE => 14.0,
            BlockType::AIR | BlockType::BEDROCK | BlockType::WATER => 2.0,
        }
    }

    /// The minimum pickaxe tier that can mine this block. Zero means bare hands.
    pub fn required_tool_tier(self) -> u8 {
        match self {
            BlockType::STONE | BlockType::COBBLESTONE | BlockType::BRICK => 1,
            BlockType::SLIVER_ORE => 2,
            BlockType::RUBY_ORE | BlockType::GOLD_ORE => 3,
            BlockType::SAPPHIRE_ORE => 4,
            BlockType::DIAMOND_ORE => 5,
            _ => 0,
        }
    }

    /// The flat RGB color a face of this block starts from before shading.
    pub fn base_color(self) -> [f32; 3] {
        match self {
            BlockType::GRASS => [0.35, 0.68, 0.22],
            BlockType::DIRT => [0.46, 0.33, 0.2],
            BlockType::STONE => [0.54, 0.56, 0.58],
            BlockType::WOOD => [0.51, 0.37, 0.19],
            BlockType::LEAVES => [0.22, 0.5, 0.2],
            BlockType::BEDROCK => [0.14, 0.14, 0.14],
            BlockType::PLANKS => [0.76, 0.61, 0.38],
            BlockType::COBBLESTONE => [0.42, 0.43, 0.45],
            BlockType::SAND => [0.86, 0.8, 0.5],
            BlockType::BRICK => [0.68, 0.28, 0.2],
            BlockType::GLASS => [0.73, 0.9, 0.95],
            BlockType::SLIVER_ORE
            | BlockType::RUBY_ORE
            | BlockType::GOLD_ORE
            | BlockType::SAPPHIRE_ORE
            | BlockType::DIAMOND_ORE => [0.54, 0.56, 0.58],
            BlockType::WATER => [0.18, 0.4, 0.78],
            BlockType::AIR => [1.0, 0.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for block in BlockType::ALL {
            assert_eq!(BlockType::from_id(block.id()), Some(block));
        }
        assert_eq!(BlockType::from_id(200), None);
    }

    #[test]
    fn water_is_rendered_but_not_solid() {
        assert!(!BlockType::WATER.is_air());
        assert!(!BlockType::WATER.is_solid());
        assert!(BlockType::STONE.is_solid());
        assert!(!BlockType::AIR.is_solid());
    }

    #[test]
    fn bedrock_cannot_be_mined_or_placed() {
        assert!(!BlockType::BEDROCK.is_breakable());
        assert!(!BlockType::BEDROCK.is_placeable());
        assert!(BlockType::BRICK.is_placeable());
    }
}
