mod adapter;
mod config;
mod text;

use _vtree_descriptor::Descriptor;

pub fn f32_descriptor(values: &[f32]) -> Descriptor {
    Descriptor::F32(values.to_vec())
}
