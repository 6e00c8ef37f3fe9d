mod configuration;
mod events;
mod lifecycle;
mod lookup;

pub use configuration::*;
pub use events::*;
pub use lifecycle::*;
pub use lookup::*;
