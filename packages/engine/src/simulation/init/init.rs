use crate::domain::settings::EffectSettings;
use crate::systems::Sparks;

use super::cadence::LoopPhase;
use super::perf_stats::PerfStats;
use super::{Automaton, BackgroundCore};

pub(super) fn create_background_core(settings: EffectSettings, automaton: Automaton) -> BackgroundCore {
    BackgroundCore {
        settings,
        automaton,
        sparks: Sparks::new(),
        viewport_width: 0.0,
        viewport_height: 0.0,
        phase: LoopPhase::Idle,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
