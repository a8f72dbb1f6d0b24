//! Scheduling core.
//!
//! The pipeline runs weight model -> week planner, with the week planner
//! driving topic selection and day allocation for each of the seven
//! weekdays. Everything here is a pure function of its inputs plus an
//! injected random source for the one probabilistic session-type choice.

pub mod allocator;
pub mod topics;
pub mod week;
pub mod weights;

pub use allocator::{allocate_day, DayAllocation, DayContext};
pub use topics::{parse_topic_list, topic_for_week};
pub use week::{plan_week, WeekConfig};
pub use weights::{compute_weights, FocusTopic, WeightedSubject};

#[cfg(test)]
mod tests;
