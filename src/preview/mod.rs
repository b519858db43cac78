// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent core of the multi-file preview.
//!
//! [`PreviewState`] holds the list, cursor, zoom and render-error flag;
//! [`classify`] decides which rendering branch a reference takes;
//! [`DerivedUrlCache`] memoizes locality and external viewer URLs;
//! [`InputDispatcher`] turns keyboard, swipe and double-click input into
//! state transitions.

pub mod file_kind;
pub mod input;
pub mod probe;
pub mod reference;
pub mod state;
pub mod transition;
pub mod url_cache;
pub mod zoom;

pub use file_kind::{classify, FileKind};
pub use input::{translate, Action, Dispatch, InputDispatcher, InputEvent};
pub use probe::{ProbeDiagnostics, ProbeOutcome, ProbeReport, ProbeSummary};
pub use reference::FileReference;
pub use state::{LoadTicket, NavigationInfo, PreviewState, RenderFailure};
pub use transition::{
    EnvironmentCapabilities, Phase, Transition, TransitionCapability, TransitionStrategy,
};
pub use url_cache::{is_local_reference, percent_encode_component, DerivedUrlCache, ViewerEndpoints};
pub use zoom::ZoomLevel;
