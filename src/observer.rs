//! Step observer trait for monitoring cloth simulation progress.

use crate::collision::ContactReport;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after forces have been accumulated for a substep.
    fn on_forces(&mut self) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after collision response with the contacts handled.
    fn on_collisions(&mut self, _report: &ContactReport) {}

    /// Called at the end of each substep.
    fn on_substep_complete(&mut self, _substep: usize) {}

    /// Called once per `animate`, after normals are recomputed.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Running totals across any number of steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: usize,
    pub substeps: usize,
    pub plane_contacts: usize,
    pub sphere_contacts: usize,
}

impl StepObserver for StepStats {
    fn on_collisions(&mut self, report: &ContactReport) {
        self.plane_contacts += report.plane_contacts;
        self.sphere_contacts += report.sphere_contacts;
    }

    fn on_substep_complete(&mut self, _substep: usize) {
        self.substeps += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
