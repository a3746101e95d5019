//! Entity <-> rigid-body synchronization

use rapier2d::na as nalgebra;
use rapier2d::prelude::{
    point, vector, CCDSolver, ColliderBuilder, ColliderSet, DefaultBroadPhase,
    ImpulseJointSet, IntegrationParameters, IslandManager, MultibodyJointSet, NarrowPhase,
    PhysicsPipeline, RigidBodyBuilder, RigidBodyHandle, RigidBodySet, Vector,
};
use slotmap::SlotMap;

use crate::platform::{Color, DrawSurface};
use crate::scene::{Entity, EntityRef, Scene};

use super::{BodyKey, BodyKind, BodyMaterial, UnitScale};

const OVERLAY_COLOR: Color = Color::rgb(0xFF, 0x00, 0xFF);

/// Pairs a rapier body with the scene entity it drives
#[derive(Debug)]
struct BodyBinding {
    body: RigidBodyHandle,
    target: EntityRef,
}

/// Owns the physics world and every registered body
///
/// Entities reference bodies only through [`BodyKey`]; bodies reference
/// entities only through [`EntityRef`]. Nothing is removed in the current
/// scope, so bindings are append-only.
pub struct PhysicsBridge {
    scale: UnitScale,
    gravity: Vector<f32>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    bindings: SlotMap<BodyKey, BodyBinding>,
}

impl PhysicsBridge {
    /// Create a world with gravity given in pixel space (y-down, positive
    /// pulls toward the bottom of the screen)
    #[must_use]
    pub fn new(gravity_pixels: (f32, f32), scale: UnitScale) -> Self {
        let gravity = vector![
            scale.to_units(gravity_pixels.0),
            scale.to_units(gravity_pixels.1)
        ];
        Self {
            scale,
            gravity,
            params: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            bindings: SlotMap::with_key(),
        }
    }

    /// Number of registered bodies
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bindings.len()
    }

    /// Create a body sized to the entity's pixel bounds and bind the two
    ///
    /// The body is placed at the entity's current center with its current
    /// rotation; the returned key is also written onto the entity.
    pub fn register_body(
        &mut self,
        target: EntityRef,
        entity: &mut Entity,
        kind: BodyKind,
        material: BodyMaterial,
    ) -> BodyKey {
        let (cx, cy) = entity.center();
        let builder = match kind {
            BodyKind::Static => RigidBodyBuilder::fixed(),
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
        };
        let body = builder
            .translation(vector![self.scale.to_units(cx), self.scale.to_units(cy)])
            .rotation(entity.angle.to_radians())
            .build();
        let handle = self.bodies.insert(body);

        let half_w = self.scale.to_units(entity.width as f32 / 2.0);
        let half_h = self.scale.to_units(entity.height as f32 / 2.0);
        let collider = ColliderBuilder::cuboid(half_w, half_h)
            .friction(material.friction)
            .restitution(material.restitution)
            .density(material.density)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        let key = self.bindings.insert(BodyBinding {
            body: handle,
            target,
        });
        entity.body = Some(key);
        key
    }

    /// Advance the simulation by exactly `dt` seconds and sync entities
    ///
    /// `dt` is always the fixed tick period, never the render delta: the
    /// integration is only stable at a constant step. After stepping, every
    /// bound entity gets the body's center and rotation copied back, with
    /// the top-left draw origin re-derived from the center.
    pub fn step(&mut self, dt: f32, scene: &mut Scene) {
        self.params.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );

        for binding in self.bindings.values() {
            let body = &self.bodies[binding.body];
            let center = body.translation();
            let angle = body.rotation().angle().to_degrees();
            if let Some(entity) = scene.entity_mut(binding.target) {
                entity.set_center(
                    self.scale.to_pixels(center.x),
                    self.scale.to_pixels(center.y),
                );
                entity.angle = angle;
            }
        }
    }

    /// Outline every collider on the surface (debug overlay)
    ///
    /// Only cuboids exist in the current scope; anything else is reported
    /// and skipped, and the frame continues.
    pub fn draw_debug(&self, surface: &mut dyn DrawSurface) {
        for binding in self.bindings.values() {
            let body = &self.bodies[binding.body];
            for collider_handle in body.colliders() {
                let collider = &self.colliders[*collider_handle];
                let Some(cuboid) = collider.shape().as_cuboid() else {
                    log::warn!("debug overlay: unrecognized collider shape, skipping");
                    continue;
                };
                let he = cuboid.half_extents;
                let pose = collider.position();
                let corners = [
                    point![-he.x, -he.y],
                    point![he.x, -he.y],
                    point![he.x, he.y],
                    point![-he.x, he.y],
                ]
                .map(|local| {
                    let world = pose.transform_point(&local);
                    (
                        self.scale.to_pixels(world.x),
                        self.scale.to_pixels(world.y),
                    )
                });
                for i in 0..4 {
                    surface.line(corners[i], corners[(i + 1) % 4], OVERLAY_COLOR);
                }
            }
        }
    }
}
