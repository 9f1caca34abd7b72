pub(crate) mod cube;
pub(crate) mod labels;
pub(crate) mod materials;
mod spin;

pub use cube::{setup_scene, CellCube, CubeAssembly};
pub use labels::{spawn_face_labels, FaceLabel};
pub use spin::{spin_angle, spin_plugin, SpinSpeed};
