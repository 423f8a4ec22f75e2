mod build_surface;

pub use build_surface::{BuildSurface, SurfaceArtifacts, SurfaceParams};
