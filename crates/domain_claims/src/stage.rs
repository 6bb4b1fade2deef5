//! Stage capability

use crate::record::ClaimRecord;

/// One unit of work in the claim pipeline
///
/// A stage reads whatever it needs from the record and extends it through the
/// record's append/add-key methods. Every call to [`Stage::run`] leaves
/// exactly one trace entry, whether or not the stage produced anything
/// useful: the entry means "this stage ran", not "this stage succeeded".
///
/// Stages never fail. When a collaborator is unavailable they log a warning
/// and continue with whatever they have.
pub trait Stage: Send + Sync {
    /// Name recorded in the trace
    fn name(&self) -> &'static str;

    /// Processes the record in place
    fn run(&self, record: &mut ClaimRecord);
}
