//! Rapier integration: turns every [`BuoyantBody`] partition into an
//! [`ExternalForce`] once per fixed step.

use bevy::prelude::*;
use bevy_log::warn;
use bevy_rapier3d::prelude::*;

use super::collision_groups;
use super::raycast::{RaycastSettings, RaycastWater, WaterVolume};
use crate::config::BuoyancyConfig;
use crate::constants::DEFAULT_HULL_DENSITY;
use crate::error::{BuoyancyError, Result};
use crate::force::{BuoyancyForceModel, Wrench};
use crate::mesh::{shapes, BuoyantMesh};
use crate::sets::BuoyancySet;
use crate::water::{WaterPhysicsWorld, WaveConfig};

/// Where buoyant bodies look for the water.
#[derive(Resource, Clone, Debug)]
pub enum WaterSurface {
    /// Analytic wave field, sampled at the current elapsed time
    Waves(WaterPhysicsWorld),
    /// Ray casts against colliders in the water collision group
    Raycast(RaycastSettings),
}

impl Default for WaterSurface {
    fn default() -> Self {
        WaterSurface::Waves(WaterPhysicsWorld::default())
    }
}

impl WaterSurface {
    pub fn waves(config: WaveConfig) -> Self {
        WaterSurface::Waves(WaterPhysicsWorld::new(config))
    }
}

/// Component holding a body's surface mesh and its per-step partition.
#[derive(Component, Debug, Clone)]
pub struct BuoyantBody {
    pub mesh: BuoyantMesh,
    /// Local centre of mass, used when the collider has no mass properties yet
    pub center_of_mass: Vec3,
}

impl BuoyantBody {
    pub fn new(mesh: BuoyantMesh) -> Self {
        Self {
            mesh,
            center_of_mass: Vec3::ZERO,
        }
    }

    pub fn with_center_of_mass(mut self, center_of_mass: Vec3) -> Self {
        self.center_of_mass = center_of_mass;
        self
    }
}

/// Bundle for a dynamic box-shaped hull that floats.
#[derive(Bundle)]
pub struct HullPhysicsBundle {
    pub body: RigidBody,
    pub collider: Collider,
    pub collider_mass: ColliderMassProperties,
    pub buoyant: BuoyantBody,
    pub external_force: ExternalForce,
    pub mass_properties: ReadMassProperties,
    pub collision_groups: CollisionGroups,
}

impl HullPhysicsBundle {
    /// Create a box hull whose buoyant mesh matches its collider, at
    /// [`DEFAULT_HULL_DENSITY`].
    ///
    /// # Arguments
    /// * `half_extents` - Half size of the box along each local axis
    pub fn boxed(half_extents: Vec3) -> Result<Self> {
        let (vertices, indices) = shapes::box_hull(half_extents);
        Ok(Self {
            body: RigidBody::Dynamic,
            collider: Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
            collider_mass: ColliderMassProperties::Density(DEFAULT_HULL_DENSITY),
            buoyant: BuoyantBody::new(BuoyantMesh::new(vertices, indices)?),
            external_force: ExternalForce::default(),
            mass_properties: ReadMassProperties::default(),
            collision_groups: CollisionGroups::new(collision_groups::HULL, Group::ALL),
        })
    }

    /// Hull density (kg/m³). Anything below the fluid density floats.
    pub fn with_density(mut self, density: f32) -> Self {
        self.collider_mass = ColliderMassProperties::Density(density);
        self
    }
}

/// Plugin that applies hydrostatic buoyancy to every [`BuoyantBody`].
///
/// Expects a rapier physics plugin to be added separately.
pub struct BuoyancyPlugin;

impl Plugin for BuoyancyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BuoyancyConfig>()
            .init_resource::<WaterSurface>()
            .configure_sets(FixedUpdate, BuoyancySet::Forces)
            .add_systems(
                FixedUpdate,
                apply_buoyancy_forces.in_set(BuoyancySet::Forces),
            );
    }
}

/// System that re-partitions each buoyant mesh and writes the resulting
/// wrench into the body's [`ExternalForce`].
///
/// A body whose update fails gets no buoyancy for that step. Ray-cast water
/// only stops on colliders marked [`WaterVolume`].
pub fn apply_buoyancy_forces(
    time: Res<Time>,
    config: Res<BuoyancyConfig>,
    water: Res<WaterSurface>,
    rapier_context: Query<(
        &RapierContextColliders,
        &RapierRigidBodySet,
        &RapierQueryPipeline,
    )>,
    water_volumes: Query<(), With<WaterVolume>>,
    mut bodies: Query<(
        Entity,
        &mut BuoyantBody,
        &GlobalTransform,
        &mut ExternalForce,
        Option<&ReadMassProperties>,
    )>,
) {
    let model = BuoyancyForceModel::from_config(&config);
    let elapsed = time.elapsed_secs();
    let is_water = |entity: Entity| water_volumes.contains(entity);
    let context = rapier_context.single();

    for (entity, mut body, global_transform, mut external_force, mass) in bodies.iter_mut() {
        if !config.enabled {
            *external_force = ExternalForce::default();
            continue;
        }

        let transform = global_transform.compute_transform();
        let local_com = mass
            .map(|m| m.get().local_center_of_mass)
            .unwrap_or(body.center_of_mass);
        let center_of_mass = transform.transform_point(local_com);

        let updated = match &*water {
            WaterSurface::Waves(world) => body.mesh.update(&transform, &world.surface_at(elapsed)),
            WaterSurface::Raycast(settings) => match &context {
                Ok((colliders, rigidbody_set, query_pipeline)) => {
                    let query = RaycastWater::new(
                        query_pipeline,
                        colliders,
                        rigidbody_set,
                        &is_water,
                        *settings,
                    );
                    body.mesh.update(&transform, &query)
                }
                Err(_) => Err(BuoyancyError::MissingPhysicsContext),
            },
        };

        let wrench = updated.and_then(|()| {
            body.mesh
                .partition()
                .map(|partition| model.wrench(partition, &transform, center_of_mass))
        });

        match wrench {
            Ok(Wrench { force, torque }) => {
                external_force.force = force;
                external_force.torque = torque;
            }
            Err(err) => {
                warn!("Skipping buoyancy for {:?} this step: {}", entity, err);
                *external_force = ExternalForce::default();
            }
        }
    }
}
