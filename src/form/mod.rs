//! UI-toolkit-independent form workflow: the submission controller, the
//! status panel, and the advisory required-field indicator.

pub mod controller;
pub mod feedback;
pub mod fields;

pub use controller::{FormController, FormSurface, SubmitOutcome};
pub use feedback::{PointerTarget, StatusPanel};
pub use fields::{Border, RequiredField};
