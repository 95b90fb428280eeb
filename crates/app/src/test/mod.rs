//! Test support shared by the domain modules.

mod helpers;

pub(crate) use helpers::{make_bodega, make_contracted_bodega};
