mod basic;
#[cfg(feature = "std")]
mod global;
mod interface;

pub use basic::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use global::*;
pub use interface::*;
