//! Scene state: the player, the bullet pool, and the block field
//!
//! The scene owns every entity for the process lifetime. Physics bodies
//! refer back into it through [`EntityRef`], which stays valid because
//! pools are fixed-size and blocks are laid out once at startup.

pub mod entity;
pub mod pool;

pub use entity::Entity;
pub use pool::EntityPool;

use crate::assets::Texture;

/// Stable reference from a physics binding to a scene entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    /// The player singleton
    Player,
    /// Bullet pool slot
    Bullet(usize),
    /// Block field index
    Block(usize),
}

/// All entities in the prototype
#[derive(Debug)]
pub struct Scene {
    /// Player singleton
    pub player: Entity,
    /// Reusable projectile pool
    pub bullets: EntityPool,
    /// Static block field, enabled permanently
    pub blocks: Vec<Entity>,
}

impl Scene {
    /// Resolve an [`EntityRef`] to its entity
    pub fn entity_mut(&mut self, target: EntityRef) -> Option<&mut Entity> {
        match target {
            EntityRef::Player => Some(&mut self.player),
            EntityRef::Bullet(i) => self.bullets.get_mut(i),
            EntityRef::Block(i) => self.blocks.get_mut(i),
        }
    }
}

/// Lay out a grid of permanently enabled block entities
///
/// Positions are assigned once; blocks never move on their own (a physics
/// body may move them later if one is registered).
#[must_use]
pub fn tiled_blocks(
    texture: &Texture,
    origin: (i32, i32),
    columns: u32,
    rows: u32,
    spacing: u32,
) -> Vec<Entity> {
    let mut blocks = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        for col in 0..columns {
            let x = origin.0 + (col * (texture.width + spacing)) as i32;
            let y = origin.1 + (row * (texture.height + spacing)) as i32;
            blocks.push(Entity::new(texture, x, y));
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_texture;

    #[test]
    fn test_tiled_layout_positions() {
        let tex = test_texture(64, 32);
        let blocks = tiled_blocks(&tex, (10, 20), 3, 2, 4);
        assert_eq!(blocks.len(), 6);
        assert_eq!((blocks[0].x, blocks[0].y), (10, 20));
        assert_eq!((blocks[1].x, blocks[1].y), (10 + 68, 20));
        assert_eq!((blocks[3].x, blocks[3].y), (10, 20 + 36));
        assert!(blocks.iter().all(|b| b.enabled));
    }

    #[test]
    fn test_entity_ref_resolution() {
        let tex = test_texture(8, 8);
        let mut scene = Scene {
            player: Entity::new(&tex, 0, 0),
            bullets: EntityPool::new(2, &tex, 10.0),
            blocks: tiled_blocks(&tex, (0, 0), 2, 1, 0),
        };
        assert!(scene.entity_mut(EntityRef::Player).is_some());
        assert!(scene.entity_mut(EntityRef::Block(1)).is_some());
        assert!(scene.entity_mut(EntityRef::Block(5)).is_none());
    }
}
