#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

#[cfg(feature = "std")]
pub type VecDeque<T> = std::collections::VecDeque<T>;
#[cfg(not(feature = "std"))]
pub type VecDeque<T> = alloc::collections::VecDeque<T>;
