mod options;
pub use self::options::*;

mod format;
pub use self::format::*;

mod names;

mod clause;
pub use self::clause::*;

mod render_cache;
pub use self::render_cache::*;
