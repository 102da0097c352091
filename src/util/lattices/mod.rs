mod boolean;
mod interval;
mod lattice_traits;
mod subset;

pub use self::boolean::*;
pub use self::interval::*;
pub use self::lattice_traits::*;
pub use self::subset::*;
