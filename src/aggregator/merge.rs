//! Combining two aggregate timer trees.
//!
//! Both trees are walked in lock-step from their roots. Matched nodes sum
//! their totals and recurse; an unmatched incoming subtree is moved into the
//! target whole, since it shares no state with anything already there.

use super::timer::AggregateTimer;
use crate::utils::error::AggregateError;
use log::debug;

impl AggregateTimer {
    /// Merge another aggregate into this one
    ///
    /// The two receiving nodes are merged unconditionally (both roots stand
    /// for the whole transaction). Root totals are summed like any other node.
    ///
    /// # Errors
    /// * `AggregateError::AnonymousTimer` - a nested timer in either tree has
    ///   no name. Nothing is merged in that case.
    pub fn merge_from(&mut self, other: AggregateTimer) -> Result<(), AggregateError> {
        check_nested_named(self)?;
        check_nested_named(&other)?;

        debug!(
            "Merging aggregate '{}' ({} us, count {}, {} nodes) into '{}'",
            other.label(),
            other.total_micros,
            other.count,
            other.node_count(),
            self.label()
        );
        self.merge_matched(other);

        Ok(())
    }

    fn merge_matched(&mut self, other: AggregateTimer) {
        self.add(other.total_micros, other.count);

        for incoming in other.nested_timers {
            // names below the root were checked by merge_from
            let Some(name) = incoming.name.as_deref() else {
                continue;
            };
            match self.matching_position(name, incoming.extended) {
                Some(index) => self.nested_timers[index].merge_matched(incoming),
                None => {
                    debug!("Adopting subtree '{}' under '{}'", name, self.label());
                    self.nested_timers.push(incoming);
                }
            }
        }
    }
}

/// Fail if any node strictly below `timer` is anonymous
fn check_nested_named(timer: &AggregateTimer) -> Result<(), AggregateError> {
    for nested in &timer.nested_timers {
        if nested.name.is_none() {
            return Err(AggregateError::AnonymousTimer {
                parent: timer.label().to_string(),
            });
        }
        check_nested_named(nested)?;
    }
    Ok(())
}
