//! The process-wide sink of statistics.
//!
//! Every statistic belongs to a [`StatisticScope`], which is the first component of its name.
//! Statistics are only written once [`configure_statistic_logging`] has been called, and only for
//! the scopes it enabled.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use enumset::EnumSet;
use enumset::EnumSetType;

/// The part of the solver a statistic describes.
#[derive(Debug, EnumSetType, Hash)]
pub enum StatisticScope {
    /// The counters of a space: propagations, commits, failures.
    Space,
    /// The counters kept by individual propagators.
    Propagator,
    /// The counters of a search driver exploring a tree of spaces.
    Search,
}

impl StatisticScope {
    fn name(self) -> &'static str {
        match self {
            StatisticScope::Space => "space",
            StatisticScope::Propagator => "propagator",
            StatisticScope::Search => "search",
        }
    }
}

/// How and where statistics are written.
///
/// Every statistic is a line `{prefix} {scope}_{name}={value}`; the closing line is written by
/// [`log_statistic_postfix`].
pub struct StatisticOptions {
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    scopes: EnumSet<StatisticScope>,
    writer: Box<dyn Write + Send + Sync>,
}

impl StatisticOptions {
    /// Writes the statistics of every scope to stdout, without a closing line.
    pub fn new(prefix: &'static str) -> Self {
        StatisticOptions {
            prefix,
            postfix: None,
            casing: None,
            scopes: EnumSet::all(),
            writer: Box::new(stdout()),
        }
    }

    pub fn with_postfix(mut self, postfix: &'static str) -> Self {
        self.postfix = Some(postfix);
        self
    }

    /// Converts the names of the statistics to `casing`.
    pub fn with_casing(mut self, casing: Case) -> Self {
        self.casing = Some(casing);
        self
    }

    /// Restricts the statistics which are written to those of `scopes`.
    pub fn with_scopes(mut self, scopes: impl Into<EnumSet<StatisticScope>>) -> Self {
        self.scopes = scopes.into();
        self
    }

    pub fn with_writer(mut self, writer: Box<dyn Write + Send + Sync>) -> Self {
        self.writer = writer;
        self
    }

    fn format_line(
        &self,
        scope: StatisticScope,
        name: impl Display,
        value: impl Display,
    ) -> String {
        let name = format!("{}_{name}", scope.name());
        let name = match self.casing {
            Some(casing) => name.to_case(casing),
            None => name,
        };

        format!("{} {name}={value}", self.prefix)
    }
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .field("scopes", &self.scopes)
            .field("writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Enables the logging of statistics. Only the first configuration takes effect.
pub fn configure_statistic_logging(options: StatisticOptions) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| RwLock::new(options));
}

/// Whether statistics of `scope` are written.
pub fn should_log_statistics(scope: StatisticScope) -> bool {
    STATISTIC_OPTIONS
        .get()
        .and_then(|options| options.read().ok().map(|options| options.scopes.contains(scope)))
        .unwrap_or(false)
}

/// Writes the statistic `name` of `scope` with `value`, if statistics of `scope` are logged.
pub fn log_statistic(scope: StatisticScope, name: impl Display, value: impl Display) {
    let Some(options) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut options) = options.write() else {
        return;
    };

    if options.scopes.contains(scope) {
        let line = options.format_line(scope, name, value);
        let _ = writeln!(options.writer, "{line}");
    }
}

/// Writes the closing line of the statistics, if one was configured.
pub fn log_statistic_postfix() {
    let Some(options) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut options) = options.write() else {
        return;
    };

    if let Some(postfix) = options.postfix {
        let _ = writeln!(options.writer, "{postfix}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_scope_is_the_first_component_of_the_name() {
        let options = StatisticOptions::new("%%%stat:");

        assert_eq!(
            "%%%stat: search_num_nodes=12",
            options.format_line(StatisticScope::Search, "num_nodes", 12)
        );
    }

    #[test]
    fn the_casing_applies_to_the_whole_name() {
        let options = StatisticOptions::new("%").with_casing(Case::Camel);

        assert_eq!(
            "% propagatorSetSubsetNumIncluded=3",
            options.format_line(StatisticScope::Propagator, "set_subset_num_included", 3)
        );
    }

    #[test]
    fn every_scope_is_enabled_unless_restricted() {
        let options = StatisticOptions::new("%");
        assert_eq!(EnumSet::all(), options.scopes);

        let options = options.with_scopes(StatisticScope::Search | StatisticScope::Space);
        assert!(!options.scopes.contains(StatisticScope::Propagator));
        assert!(options.scopes.contains(StatisticScope::Search));
    }
}
