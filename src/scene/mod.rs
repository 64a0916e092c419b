//! Scene assembly: from a feature set to layered, print-ready meshes.

mod layer;
mod orient;
mod plate_clip;
mod store;

pub use layer::{Layer, LayerName};
pub use orient::{nearest_road_angle, orient_crossings};
pub use plate_clip::clip_to_plate;
pub use store::{MeshId, MeshStore};

use tracing::{debug, info, trace, warn};

use crate::error::{Result, SceneError};
use crate::features::TactileMapData;
use crate::generators::{base_plate, orientation_marker, Feature, SceneParams};
use crate::math::Rect;
use crate::tessellation::TriangleMesh;

/// The assembled plate: every layer in presentation order, plus the arena
/// that owns their meshes.
///
/// Meshes stay alive until [`Scene::dispose`] or [`Scene::release`] is
/// called; dropping the scene frees whatever is left.
#[derive(Debug)]
pub struct Scene {
    store: MeshStore,
    layers: Vec<Layer>,
    plate_width_mm: f64,
    plate_height_mm: f64,
}

impl Scene {
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, name: LayerName) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Shows or hides a layer. Returns `false` if the scene has no such
    /// layer.
    pub fn set_visible(&mut self, name: LayerName, visible: bool) -> bool {
        match self.layers.iter_mut().find(|l| l.name == name) {
            Some(layer) => {
                layer.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Returns the mesh behind a handle.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MeshReleased`] if the mesh was released, or
    /// [`SceneError::MeshNotFound`] if the handle belongs to another scene.
    pub fn mesh(&self, id: MeshId) -> Result<&TriangleMesh> {
        Ok(self.store.get(id)?)
    }

    /// Iterates the live meshes of one layer.
    #[must_use]
    pub fn meshes(&self, name: LayerName) -> impl Iterator<Item = &TriangleMesh> {
        self.layer(name)
            .into_iter()
            .flat_map(|l| l.meshes.iter())
            .filter_map(move |&id| self.store.get(id).ok())
    }

    /// Combines the live meshes of one layer into a single mesh.
    #[must_use]
    pub fn merged(&self, name: LayerName) -> TriangleMesh {
        let mut combined = TriangleMesh::default();
        for mesh in self.meshes(name) {
            combined.merge(mesh);
        }
        combined
    }

    /// Total triangles across all live meshes.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        LayerName::ALL
            .iter()
            .flat_map(|&name| self.meshes(name))
            .map(TriangleMesh::triangle_count)
            .sum()
    }

    #[must_use]
    pub fn plate_width_mm(&self) -> f64 {
        self.plate_width_mm
    }

    #[must_use]
    pub fn plate_height_mm(&self) -> f64 {
        self.plate_height_mm
    }

    /// Releases a single mesh and removes its handle from its layer.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MeshReleased`] if the mesh was already
    /// released, or [`SceneError::MeshNotFound`] for a foreign handle.
    pub fn release(&mut self, id: MeshId) -> Result<()> {
        self.store.release(id)?;
        for layer in &mut self.layers {
            layer.meshes.retain(|&m| m != id);
        }
        Ok(())
    }

    /// Releases every mesh still held by a layer and returns how many were
    /// released. Layers are left empty, so a second call releases nothing.
    pub fn dispose(&mut self) -> usize {
        let mut released = 0;
        for layer in &mut self.layers {
            for id in layer.meshes.drain(..) {
                match self.store.release(id) {
                    Ok(()) => released += 1,
                    Err(SceneError::MeshReleased) => {}
                    Err(err) => warn!(layer = %layer.name, %err, "dispose failed"),
                }
            }
        }
        debug!(released, "disposed scene meshes");
        released
    }
}

/// Feature views of everything that belongs on a generated layer.
fn features_on(name: LayerName, data: &TactileMapData) -> Vec<Feature<'_>> {
    match name {
        LayerName::Roads => data.roads.iter().map(Feature::Road).collect(),
        LayerName::Sidewalks => data.sidewalks.iter().map(Feature::Sidewalk).collect(),
        LayerName::Crossings => data.crossings.iter().map(Feature::Crossing).collect(),
        LayerName::Buildings => data.buildings.iter().map(Feature::Building).collect(),
        LayerName::Curbs => data.curbs.iter().map(Feature::Curb).collect(),
        LayerName::BikeLanes => data.bike_lanes.iter().map(Feature::BikeLane).collect(),
        LayerName::TrafficSignals => {
            data.traffic_signals.iter().map(Feature::TrafficSignal).collect()
        }
        LayerName::BusStops => data.bus_stops.iter().map(Feature::BusStop).collect(),
        LayerName::FeatureSlots => data.feature_slots.iter().map(Feature::FeatureSlot).collect(),
        LayerName::BasePlate | LayerName::OrientationMarker => Vec::new(),
    }
}

/// Builds a scene from a feature set.
///
/// Single-node crossings are first oriented across their nearest road, then
/// everything is clipped to the plate and each feature generated onto its
/// layer. Features that yield no geometry are skipped; assembly itself never
/// fails.
#[must_use]
pub fn assemble_scene(data: &TactileMapData, params: &SceneParams) -> Scene {
    let width = data.metadata.plate_width_mm;
    let height = data.metadata.plate_height_mm;
    let plate = Rect::centered(width, height);

    let mut oriented = data.clone();
    oriented.crossings =
        orient_crossings(&data.crossings, &data.roads, params.markers.crossing_span);
    let clipped = clip_to_plate(&oriented, &plate);

    let mut store = MeshStore::new();
    let layers: Vec<Layer> = LayerName::ALL
        .iter()
        .map(|&name| {
            let generated: Vec<TriangleMesh> = match name {
                LayerName::BasePlate => base_plate(width, height, params).into_iter().collect(),
                LayerName::OrientationMarker => {
                    orientation_marker(width, height, params).into_iter().collect()
                }
                _ => features_on(name, &clipped)
                    .iter()
                    .filter_map(|feature| {
                        let mesh = feature.generate(Some(&plate), params);
                        if mesh.is_none() {
                            trace!(id = feature.id(), layer = %name, "no geometry");
                        }
                        mesh
                    })
                    .collect(),
            };
            let ids: Vec<MeshId> = generated.into_iter().map(|m| store.insert(m)).collect();
            debug!(layer = %name, meshes = ids.len(), "generated layer");
            Layer::new(name, ids)
        })
        .collect();

    let scene = Scene {
        store,
        layers,
        plate_width_mm: width,
        plate_height_mm: height,
    };
    info!(
        features = data.feature_count(),
        meshes = scene.store.live_count(),
        triangles = scene.triangle_count(),
        "assembled scene"
    );
    scene
}
