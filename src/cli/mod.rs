//! Command line host for the form controller

pub mod convert;
pub mod interactive;
pub mod setup;
pub mod ui;

use crate::core::{Field, FormController, FormEvent, FormState};
use tracing::debug;

/// Feeds one user edit into the controller and echoes every derived write
/// back as an input notification, the way a widget toolkit would report a
/// programmatic value change.
pub fn apply_edit(controller: &mut FormController, field: Field, text: &str) -> Option<FormState> {
    let state = controller.handle(FormEvent::Input {
        field,
        text: text.to_string(),
    })?;
    for derived in &state.derived {
        let echoed = controller.handle(FormEvent::Input {
            field: *derived,
            text: state.fields.get(*derived).to_string(),
        });
        debug!(field = %derived, suppressed = echoed.is_none(), "Echoed derived write");
    }
    Some(state)
}
