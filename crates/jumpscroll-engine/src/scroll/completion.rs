//! Completion handling for a finished run

use tracing::debug;

use super::animation::RunState;

/// Finish a run: land exactly on the destination, move focus, fire the callback
///
/// The exact commit corrects whatever the last eased sample left behind, so the
/// surface always ends at `start + distance` whatever the frame timing was.
pub(crate) fn finish(mut run: RunState) {
    let destination = run.destination();
    run.surface.set_offset(run.axis, destination);

    let focused = match (&run.target_element, run.a11y) {
        (Some(element), true) => {
            element.set_tab_index(-1);
            element.focus();
            true
        }
        _ => false,
    };

    debug!(
        axis = ?run.axis,
        stop = run.stop,
        destination,
        exact = run.exact,
        elapsed = run.time_elapsed,
        focused,
        "Jump complete"
    );

    if let Some(callback) = run.on_complete.take() {
        callback();
    }

    run.time_start = None;
}
