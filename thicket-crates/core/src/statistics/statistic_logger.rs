use std::fmt::Display;

use super::statistic_logging::log_statistic;
use super::StatisticScope;
#[cfg(doc)]
use crate::propagation::Propagator;

/// Names the statistics of one part of the solver: a [`StatisticScope`] followed by the
/// components attached with [`StatisticLogger::attach_to_prefix`], for example the name and id of
/// a [`Propagator`].
#[derive(Debug, Clone)]
pub struct StatisticLogger {
    scope: StatisticScope,
    name_prefix: String,
}

impl StatisticLogger {
    pub fn new(scope: StatisticScope) -> Self {
        StatisticLogger {
            scope,
            name_prefix: String::new(),
        }
    }

    pub fn attach_to_prefix(&self, addition_to_prefix: impl Display) -> Self {
        let name_prefix = if self.name_prefix.is_empty() {
            addition_to_prefix.to_string()
        } else {
            format!("{}_{addition_to_prefix}", self.name_prefix)
        };

        StatisticLogger {
            scope: self.scope,
            name_prefix,
        }
    }

    pub fn scope(&self) -> StatisticScope {
        self.scope
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }
}

impl std::fmt::Write for StatisticLogger {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        log_statistic(self.scope, &self.name_prefix, s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_joined_with_underscores() {
        let logger = StatisticLogger::new(StatisticScope::Propagator)
            .attach_to_prefix("SetSubset")
            .attach_to_prefix(3);

        assert_eq!("SetSubset_3", logger.name_prefix());
        assert_eq!(StatisticScope::Propagator, logger.scope());
    }

    #[test]
    fn the_first_component_has_no_separator() {
        let logger = StatisticLogger::new(StatisticScope::Search).attach_to_prefix("num_nodes");

        assert_eq!("num_nodes", logger.name_prefix());
    }
}
