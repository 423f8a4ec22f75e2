use thiserror::Error;

/// Top-level error type for the geostrata surface pipeline.
#[derive(Debug, Error)]
pub enum GeostrataError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to point-set operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("computation failed: {0}")]
    ComputationFailed(String),
}

/// Errors related to meshing.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("mesh unavailable: {0}")]
    MeshUnavailable(MeshFailure),
}

/// Reason a triangulation could not be produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshFailure {
    #[error("need at least 3 distinct points, found {found}")]
    TooFewPoints { found: usize },

    #[error("all points are collinear")]
    Collinear,

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("inconsistent triangulation: {0}")]
    InvalidTriangulation(String),
}

impl From<MeshFailure> for GeostrataError {
    fn from(reason: MeshFailure) -> Self {
        TessellationError::MeshUnavailable(reason).into()
    }
}

/// Convenience type alias for results using [`GeostrataError`].
pub type Result<T> = std::result::Result<T, GeostrataError>;
