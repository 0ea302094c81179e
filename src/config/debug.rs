//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit every generated sample (very noisy at the 500ms cadence).
    pub log_sample_ticks: bool,

    /// Emit pulse metric recomputations.
    pub log_metric_updates: bool,

    /// Emit publish-gate decisions from the UI poll loop.
    pub log_publish_gate: bool,

    /// Emit remote poll outcomes (live vs demo substitution).
    pub log_remote_polls: bool,

    pub log_score_history: bool,
}

pub const DF: LogFlags = LogFlags {
    log_remote_polls: true,

    log_sample_ticks: false,
    log_metric_updates: false,
    log_publish_gate: false,
    log_score_history: false,
};
