use thiserror::Error;

/// Top-level error type for the tactimesh crate.
///
/// Geometry generation itself never fails; degenerate features simply
/// produce no mesh. Errors only surface at the crate boundaries: reading
/// input data and accessing the mesh arena of an assembled scene.
#[derive(Debug, Error)]
pub enum TactimeshError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to reading map data or parameters.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to the mesh arena owned by a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("mesh handle does not belong to this scene")]
    MeshNotFound,

    #[error("mesh has already been released")]
    MeshReleased,
}

/// Convenience type alias for results using [`TactimeshError`].
pub type Result<T> = std::result::Result<T, TactimeshError>;
