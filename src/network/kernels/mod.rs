//! Bundled network kernels.

mod batcher;
mod best;
mod bitonic;
mod bosenelson;
mod minimum;
mod oddeven;

pub use batcher::*;
pub use best::*;
pub use bitonic::*;
pub use bosenelson::*;
pub use minimum::*;
pub use oddeven::*;

use crate::network::Descriptor;

/// Every bundled kernel.
pub const CATALOG: &[Descriptor] = &[
    Descriptor::of::<Batcher4>(),
    Descriptor::of::<Batcher5>(),
    Descriptor::of::<Batcher6>(),
    Descriptor::of::<Batcher7>(),
    Descriptor::of::<Batcher8>(),
    Descriptor::of::<Batcher9>(),
    Descriptor::of::<Batcher10>(),
    Descriptor::of::<Batcher11>(),
    Descriptor::of::<Batcher12>(),
    Descriptor::of::<Batcher13>(),
    Descriptor::of::<Batcher14>(),
    Descriptor::of::<Batcher16>(),
    Descriptor::of::<Batcher17>(),
    Descriptor::of::<Batcher18>(),
    Descriptor::of::<Batcher19>(),
    Descriptor::of::<Batcher20>(),
    Descriptor::of::<Batcher21>(),
    Descriptor::of::<Batcher22>(),
    Descriptor::of::<Batcher23>(),
    Descriptor::of::<Batcher24>(),
    Descriptor::of::<Batcher25>(),
    Descriptor::of::<Batcher26>(),
    Descriptor::of::<Batcher27>(),
    Descriptor::of::<Batcher30>(),
    Descriptor::of::<Batcher32>(),
    Descriptor::of::<Best7>(),
    Descriptor::of::<Best10>(),
    Descriptor::of::<Best11>(),
    Descriptor::of::<Best21>(),
    Descriptor::of::<Best30>(),
    Descriptor::of::<Best61>(),
    Descriptor::of::<Bitonic4>(),
    Descriptor::of::<Bitonic5>(),
    Descriptor::of::<Bitonic6>(),
    Descriptor::of::<Bitonic7>(),
    Descriptor::of::<Bitonic8>(),
    Descriptor::of::<Bitonic9>(),
    Descriptor::of::<Bitonic10>(),
    Descriptor::of::<Bitonic11>(),
    Descriptor::of::<Bitonic12>(),
    Descriptor::of::<Bitonic13>(),
    Descriptor::of::<Bitonic14>(),
    Descriptor::of::<Bitonic15>(),
    Descriptor::of::<Bitonic16>(),
    Descriptor::of::<Bitonic17>(),
    Descriptor::of::<Bitonic18>(),
    Descriptor::of::<Bitonic19>(),
    Descriptor::of::<Bitonic20>(),
    Descriptor::of::<Bitonic21>(),
    Descriptor::of::<Bitonic22>(),
    Descriptor::of::<Bitonic23>(),
    Descriptor::of::<Bitonic24>(),
    Descriptor::of::<Bitonic25>(),
    Descriptor::of::<Bitonic26>(),
    Descriptor::of::<Bitonic27>(),
    Descriptor::of::<Bitonic28>(),
    Descriptor::of::<Bitonic29>(),
    Descriptor::of::<Bitonic30>(),
    Descriptor::of::<Bitonic31>(),
    Descriptor::of::<Bitonic32>(),
    Descriptor::of::<Bitonic64>(),
    Descriptor::of::<Bosenelson4>(),
    Descriptor::of::<Bosenelson7>(),
    Descriptor::of::<Bosenelson8>(),
    Descriptor::of::<Bosenelson9>(),
    Descriptor::of::<Bosenelson10>(),
    Descriptor::of::<Bosenelson11>(),
    Descriptor::of::<Bosenelson12>(),
    Descriptor::of::<Bosenelson13>(),
    Descriptor::of::<Bosenelson14>(),
    Descriptor::of::<Bosenelson15>(),
    Descriptor::of::<Bosenelson16>(),
    Descriptor::of::<Bosenelson17>(),
    Descriptor::of::<Bosenelson18>(),
    Descriptor::of::<Bosenelson22>(),
    Descriptor::of::<Bosenelson24>(),
    Descriptor::of::<Bosenelson26>(),
    Descriptor::of::<Bosenelson27>(),
    Descriptor::of::<Bosenelson28>(),
    Descriptor::of::<Bosenelson31>(),
    Descriptor::of::<Minimum4>(),
    Descriptor::of::<Minimum7>(),
    Descriptor::of::<Minimum8>(),
    Descriptor::of::<Minimum9>(),
    Descriptor::of::<Minimum11>(),
    Descriptor::of::<Minimum13>(),
    Descriptor::of::<Minimum14>(),
    Descriptor::of::<Minimum15>(),
    Descriptor::of::<Minimum16>(),
    Descriptor::of::<Minimum17>(),
    Descriptor::of::<Minimum18>(),
    Descriptor::of::<Minimum19>(),
    Descriptor::of::<Minimum21>(),
    Descriptor::of::<Minimum22>(),
    Descriptor::of::<Minimum23>(),
    Descriptor::of::<Minimum25>(),
    Descriptor::of::<Minimum26>(),
    Descriptor::of::<Minimum27>(),
    Descriptor::of::<Minimum28>(),
    Descriptor::of::<Minimum29>(),
    Descriptor::of::<Minimum31>(),
    Descriptor::of::<Oddeven6>(),
    Descriptor::of::<Oddeven9>(),
    Descriptor::of::<Oddeven14>(),
    Descriptor::of::<Oddeven15>(),
    Descriptor::of::<Oddeven16>(),
    Descriptor::of::<Oddeven17>(),
    Descriptor::of::<Oddeven20>(),
    Descriptor::of::<Oddeven29>(),
    Descriptor::of::<Oddeven61>(),
];
