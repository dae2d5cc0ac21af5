//! Asset import.
//!
//! Only the scene *hierarchy* is imported: nodes, transforms, skins. Mesh
//! geometry, materials and animations belong to the host's renderer and are
//! deliberately not parsed here.

pub mod gltf;

pub use gltf::{GltfImport, import_path, import_slice};
