//! Sequential curve bootstrapping.

mod sequential;

pub use sequential::{bootstrap_discount_curve, bootstrap_forward_curve, BootstrapOptions};
