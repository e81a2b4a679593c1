//! Behavior of the waitlist landing page as an embeddable library.
//!
//! The interactive surface of the page is modeled as explicit state the
//! embedder renders from: the signup form pipeline with its sheet
//! delivery and local fallback, the floating scroll-to-top button,
//! in-page anchor handling, and the one-shot card reveal animation.
//! [`Page`] ties them together behind a single event dispatch.

pub mod form;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod view;

pub use form::{Delivery, SignupForm, SubmitOutcome};
pub use page::{Page, PageCue, PageEvent};
pub use reveal::{CARD_ROLES, RevealConfig, RevealObserver, RevealState, RevealStyle};
pub use scroll::{AnchorAction, SCROLL_TOP_THRESHOLD, ScrollCue, ScrollToTopButton, resolve_anchor};
pub use view::{ERROR_AUTOHIDE, FormView, SENDING_LABEL, SubmitButton};
