mod boolean;
mod counting;
mod semiring_traits;
mod tropical;

pub use self::boolean::*;
pub use self::counting::*;
pub use self::semiring_traits::*;
pub use self::tropical::*;
