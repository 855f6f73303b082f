//! Debug adapter abstraction

mod traits;

pub use traits::{Adapter, AdapterCaps};
