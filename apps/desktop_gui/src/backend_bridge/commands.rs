//! Commands queued from UI to the controller runtime.

use shared::domain::FieldEdit;

pub enum BackendCommand {
    Edit(FieldEdit),
    Submit,
}
