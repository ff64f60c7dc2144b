//! Spread layout: partitioning a reading order into rendered screen units.
//!
//! This module contains:
//! - The [`Spread`] variant type (one or two pages per screen)
//! - The [`LayoutComputer`] state machine pairing pages under LTR/RTL rules
//! - The [`SpreadLayout`] navigation plan with position queries

mod computer;
mod pager;
mod spread;

pub use computer::LayoutComputer;
pub use pager::SpreadLayout;
pub use spread::Spread;
