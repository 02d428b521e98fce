//! Shared test utilities for `randgraph-core`.

use std::collections::VecDeque;

use proptest::test_runner::Config as ProptestConfig;
use randgraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::generate::UniformSource;

/// Builds a proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`UniformSource`] that replays scripted draws.
///
/// Index draws are reduced modulo the requested bound so scripts stay valid
/// for any vertex count. Running out of script is a test bug and panics.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    indices: VecDeque<usize>,
    units: VecDeque<f64>,
    index_draws: usize,
}

impl ScriptedSource {
    pub(crate) fn with_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            ..Self::default()
        }
    }

    pub(crate) fn with_units(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            units: units.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Number of index draws served so far.
    pub(crate) fn index_draws(&self) -> usize {
        self.index_draws
    }
}

impl UniformSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.index_draws += 1;
        let value = self
            .indices
            .pop_front()
            .unwrap_or_else(|| panic!("index script exhausted after {} draws", self.index_draws));
        value % bound
    }

    fn next_unit(&mut self) -> f64 {
        self.units
            .pop_front()
            .unwrap_or_else(|| panic!("unit script exhausted"))
    }
}
