//! Fixed-capacity entity pool
//!
//! All slots are pre-allocated at startup and recycled by toggling
//! `enabled`; the pool never grows. Used for bullets: a spawn that finds no
//! free slot fails and the caller drops the shot.

use crate::assets::Texture;

use super::entity::Entity;

/// Bounded pool of reusable entities, identity = slot index
#[derive(Debug)]
pub struct EntityPool {
    slots: Vec<Entity>,
    default_ttl: f32,
}

impl EntityPool {
    /// Pre-allocate `capacity` disabled entities sized to `texture`
    #[must_use]
    pub fn new(capacity: usize, texture: &Texture, default_ttl: f32) -> Self {
        let slots = (0..capacity)
            .map(|_| {
                let mut e = Entity::new(texture, 0, 0);
                e.enabled = false;
                e
            })
            .collect();
        Self { slots, default_ttl }
    }

    /// Activate the first free slot at the given origin
    ///
    /// Returns the slot index, or `None` when every slot is live. Failure is
    /// non-fatal and leaves the pool untouched; the caller reports it.
    pub fn spawn(&mut self, x: f32, y: f32) -> Option<usize> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, e)| !e.enabled)?;
        slot.set_position(x, y);
        slot.angle = 0.0;
        slot.enabled = true;
        slot.dynamic = true;
        slot.ttl_enabled = true;
        slot.ttl = self.default_ttl;
        Some(index)
    }

    /// Decay every live slot's TTL by the wall-clock `delta`
    pub fn tick(&mut self, delta: f32) {
        for slot in &mut self.slots {
            slot.tick_ttl(delta);
        }
    }

    /// Total number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently live slots
    #[must_use]
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|e| e.enabled).count()
    }

    /// Iterate over all slots (draw code filters on `enabled`)
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.slots.iter()
    }

    /// Slot access by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.slots.get(index)
    }

    /// Mutable slot access by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.slots.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_texture;

    fn pool(capacity: usize) -> EntityPool {
        EntityPool::new(capacity, &test_texture(8, 8), 10.0)
    }

    #[test]
    fn test_slots_start_disabled() {
        let p = pool(4);
        assert_eq!(p.live(), 0);
        assert_eq!(p.capacity(), 4);
    }

    #[test]
    fn test_spawn_initializes_slot() {
        let mut p = pool(4);
        let i = p.spawn(120.0, 40.0).expect("free slot");
        let e = p.get(i).unwrap();
        assert!(e.enabled && e.dynamic && e.ttl_enabled);
        assert_eq!(e.ttl, 10.0);
        assert_eq!((e.x, e.y), (120, 40));
    }

    #[test]
    fn test_exhausted_pool_rejects_spawn() {
        let mut p = pool(3);
        for _ in 0..3 {
            assert!(p.spawn(0.0, 0.0).is_some());
        }
        let before: Vec<f32> = p.iter().map(|e| e.ttl).collect();
        assert!(p.spawn(0.0, 0.0).is_none());
        let after: Vec<f32> = p.iter().map(|e| e.ttl).collect();
        assert_eq!(before, after);
        assert_eq!(p.live(), 3);
    }

    #[test]
    fn test_expired_slot_is_reused() {
        let mut p = pool(1);
        p.spawn(1.0, 1.0).expect("first spawn");
        assert!(p.spawn(2.0, 2.0).is_none());

        p.tick(11.0);
        assert_eq!(p.live(), 0);

        let i = p.spawn(2.0, 2.0).expect("recycled slot");
        assert_eq!(i, 0);
        assert_eq!(p.get(0).unwrap().ttl, 10.0);
    }

    #[test]
    fn test_tick_decays_only_live_slots() {
        let mut p = pool(2);
        p.spawn(0.0, 0.0).expect("spawn");
        p.tick(4.0);
        assert_eq!(p.get(0).unwrap().ttl, 6.0);
        assert_eq!(p.get(1).unwrap().ttl, 0.0);
        assert!(!p.get(1).unwrap().enabled);
    }
}
