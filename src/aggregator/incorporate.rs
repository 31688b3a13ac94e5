//! Folding one transaction's timer tree into an aggregate.
//!
//! The transaction's top-level timer is matched among the nested timers of
//! the node it is incorporated into, then its own nested timers are
//! incorporated into that match, level by level. When the receiving node is
//! the synthetic root, the root's totals also take the top-level timer's
//! duration and count, so the root tracks whole-transaction totals.

use super::timer::{match_or_append, AggregateTimer};
use crate::parser::execution::TransactionTimer;
use crate::utils::config::NANOS_PER_MICRO;
use crate::utils::error::AggregateError;
use log::debug;

impl AggregateTimer {
    /// Incorporate one transaction's timer tree
    ///
    /// **Public** - main entry point for building an aggregate
    ///
    /// # Errors
    /// * `AggregateError::AnonymousTimer` - some timer in `timer` has no name.
    ///   The aggregate is left untouched.
    pub fn incorporate<T: TransactionTimer>(&mut self, timer: &T) -> Result<(), AggregateError> {
        check_named(timer, self.label())?;

        debug!(
            "Incorporating '{}' ({} ns, count {}) into '{}'",
            timer.name().unwrap_or_default(),
            timer.total_nanos(),
            timer.count(),
            self.label()
        );
        self.incorporate_checked(timer);

        Ok(())
    }

    fn incorporate_checked<T: TransactionTimer>(&mut self, timer: &T) {
        let Some(name) = timer.name() else {
            return;
        };
        let total_micros = nanos_to_micros(timer.total_nanos());

        if self.is_synthetic_root() {
            self.add(total_micros, timer.count());
        }

        let index = match_or_append(self, name, timer.is_extended());
        let matched = &mut self.nested_timers[index];
        matched.add(total_micros, timer.count());

        for nested in timer.nested_timers() {
            matched.incorporate_checked(nested);
        }
    }
}

/// Truncating nanosecond to microsecond conversion
pub fn nanos_to_micros(nanos: u64) -> u64 {
    nanos / NANOS_PER_MICRO
}

/// Reject a transaction tree containing any anonymous timer
///
/// **Private** - runs before mutation so a rejected tree leaves no trace
fn check_named<T: TransactionTimer>(timer: &T, parent: &str) -> Result<(), AggregateError> {
    let Some(name) = timer.name() else {
        return Err(AggregateError::AnonymousTimer {
            parent: parent.to_string(),
        });
    };
    for nested in timer.nested_timers() {
        check_named(nested, name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::execution::ExecutionTimer;

    #[test]
    fn test_nanos_to_micros_truncates() {
        assert_eq!(nanos_to_micros(0), 0);
        assert_eq!(nanos_to_micros(999), 0);
        assert_eq!(nanos_to_micros(1_500), 1);
        assert_eq!(nanos_to_micros(1_250_500), 1_250);
    }

    #[test]
    fn test_root_tracks_top_level_timer() {
        let mut root = AggregateTimer::create_synthetic_root();
        let transaction = ExecutionTimer::new("http request", 5_000_000, 3)
            .with_nested(ExecutionTimer::new("sql", 1_000_000, 7));

        root.incorporate(&transaction).unwrap();

        assert_eq!(root.total_micros(), 5_000);
        assert_eq!(root.count(), 3);
        let top = root.find_nested_timer("http request", false).unwrap();
        assert_eq!(top.total_micros(), 5_000);
        assert_eq!(top.nested_timers()[0].count(), 7);
    }

    #[test]
    fn test_named_receiver_is_not_special_cased() {
        let mut root = AggregateTimer::create_synthetic_root();
        root.incorporate(&ExecutionTimer::new("outer", 2_000, 1)).unwrap();

        let outer = &mut root.nested_timers[0];
        outer.incorporate(&ExecutionTimer::new("inner", 4_000, 1)).unwrap();

        assert_eq!(root.nested_timers()[0].total_micros(), 2);
        assert_eq!(root.nested_timers()[0].nested_timers()[0].total_micros(), 4);
    }

    #[test]
    fn test_anonymous_nested_timer_leaves_aggregate_untouched() {
        let mut root = AggregateTimer::create_synthetic_root();
        root.incorporate(&ExecutionTimer::new("request", 1_000, 1)).unwrap();
        let before = root.clone();

        let mut anonymous = ExecutionTimer::new("ignored", 5_000, 1);
        anonymous.name = None;
        let transaction = ExecutionTimer::new("request", 9_000, 1)
            .with_nested(ExecutionTimer::new("sql", 1_000, 1).with_nested(anonymous));

        let err = root.incorporate(&transaction).unwrap_err();

        assert_eq!(
            err,
            AggregateError::AnonymousTimer {
                parent: "sql".to_string()
            }
        );
        assert_eq!(root, before);
    }

    #[test]
    fn test_anonymous_top_level_timer_is_rejected() {
        let mut root = AggregateTimer::create_synthetic_root();
        let mut transaction = ExecutionTimer::new("x", 1_000, 1);
        transaction.name = None;

        assert!(root.incorporate(&transaction).is_err());
        assert!(root.nested_timers().is_empty());
        assert_eq!(root.count(), 0);
    }
}
