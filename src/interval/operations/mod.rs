mod difference;
mod union;

pub use difference::compute_difference;
pub use union::compute_union;
pub(crate) use union::merge_into;

#[cfg(debug_assertions)]
pub mod assertions;

#[cfg(not(debug_assertions))]
pub mod assertions {
    use crate::interval::Interval;

    pub fn is_canonical(_intervals: &[Interval]) -> bool {
        true
    }
}
