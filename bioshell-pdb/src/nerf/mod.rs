//! Natural Extension Reference Frame (NeRF) translates from internal to Cartesian coordinates
mod nerf;
mod kinematic_atom_tree;

pub use nerf::*;
pub use kinematic_atom_tree::*;