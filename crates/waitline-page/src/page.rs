//! Page facade: one dispatch surface binding the signup form and the
//! cosmetic scroll and reveal behaviors.

use std::collections::HashSet;
use std::time::Instant;

use waitline_store::StoreError;

use crate::form::{Delivery, SignupForm, SubmitOutcome};
use crate::reveal::{CARD_ROLES, RevealConfig, RevealObserver};
use crate::scroll::{AnchorAction, ScrollCue, ScrollToTopButton, resolve_anchor};
use crate::view::FormView;

/// A discrete page event, as produced by the embedder's bindings.
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// The form was submitted with the raw email field value. The
    /// embedder's binding cancels default form navigation before
    /// dispatching; the handler is async and cannot do it in time.
    Submit { email: String },
    /// The vertical scroll offset changed.
    Scrolled { offset: f64 },
    /// The floating scroll-to-top control was clicked.
    ScrollTopClicked,
    /// A link was clicked.
    AnchorClicked { href: String },
    /// An observed card's viewport intersection changed.
    CardIntersection { id: String, intersecting: bool },
    /// UI clock tick.
    Tick { now: Instant },
}

/// What the embedder should do after an event, beyond re-rendering from
/// the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCue {
    /// Cancel the click's default navigation.
    PreventDefault,
    Scroll(ScrollCue),
}

/// The whole landing page behavior behind one event dispatch.
pub struct Page<D: Delivery> {
    form: SignupForm<D>,
    scroll_top: ScrollToTopButton,
    reveals: RevealObserver,
    sections: HashSet<String>,
}

impl<D: Delivery> Page<D> {
    pub fn new(form: SignupForm<D>) -> Self {
        Self {
            form,
            scroll_top: ScrollToTopButton::new(),
            reveals: RevealObserver::new(RevealConfig::default()),
            sections: HashSet::new(),
        }
    }

    // ── Registration, done once at page load ──

    /// Register a section element addressable by fragment links.
    pub fn register_section(&mut self, id: impl Into<String>) {
        self.sections.insert(id.into());
    }

    /// Register an element for the reveal animation. Elements whose role
    /// is not a card role are left alone.
    pub fn observe_card(&mut self, id: impl Into<String>, role: &str) {
        if CARD_ROLES.contains(&role) {
            self.reveals.observe(id);
        }
    }

    // ── State the embedder renders from ──

    pub fn view(&self) -> &FormView {
        self.form.view()
    }

    pub fn form(&self) -> &SignupForm<D> {
        &self.form
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_top.visible()
    }

    pub fn reveals(&self) -> &RevealObserver {
        &self.reveals
    }

    /// Route one event. Submission is the only arm that suspends;
    /// everything else resolves immediately.
    pub async fn dispatch(&mut self, event: PageEvent) -> Result<Vec<PageCue>, StoreError> {
        match event {
            PageEvent::Submit { email } => {
                let outcome = self.form.submit(&email).await?;
                Ok(match outcome {
                    SubmitOutcome::Accepted { .. } => {
                        vec![PageCue::Scroll(ScrollCue::ToSuccessPanel)]
                    }
                    SubmitOutcome::Invalid | SubmitOutcome::Duplicate => Vec::new(),
                })
            }
            PageEvent::Scrolled { offset } => {
                self.scroll_top.on_scroll(offset);
                Ok(Vec::new())
            }
            PageEvent::ScrollTopClicked => Ok(vec![PageCue::Scroll(self.scroll_top.click())]),
            PageEvent::AnchorClicked { href } => {
                Ok(
                    match resolve_anchor(&href, |id| self.sections.contains(id)) {
                        AnchorAction::Browser => Vec::new(),
                        AnchorAction::Intercepted => vec![PageCue::PreventDefault],
                        AnchorAction::ScrollTo(id) => vec![
                            PageCue::PreventDefault,
                            PageCue::Scroll(ScrollCue::ToSection(id)),
                        ],
                    },
                )
            }
            PageEvent::CardIntersection { id, intersecting } => {
                self.reveals.on_intersection(&id, intersecting);
                Ok(Vec::new())
            }
            PageEvent::Tick { now } => {
                self.form.tick(now);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use waitline_store::WaitlistStore;
    use waitline_sync::SheetClient;

    use crate::reveal::RevealState;

    use super::*;

    fn page(dir: &std::path::Path) -> Page<SheetClient> {
        let store = WaitlistStore::open(dir).unwrap();
        Page::new(SignupForm::new(store, None, "Join the waitlist"))
    }

    #[tokio::test]
    async fn accepted_submission_cues_a_scroll_to_the_success_panel() {
        let dir = tempdir().unwrap();
        let mut page = page(dir.path());

        let cues = page
            .dispatch(PageEvent::Submit {
                email: "ada@example.com".into(),
            })
            .await
            .unwrap();

        assert_eq!(cues, vec![PageCue::Scroll(ScrollCue::ToSuccessPanel)]);
        assert!(page.view().success_visible);
    }

    #[tokio::test]
    async fn rejected_submission_cues_nothing() {
        let dir = tempdir().unwrap();
        let mut page = page(dir.path());

        let cues = page
            .dispatch(PageEvent::Submit {
                email: "bad".into(),
            })
            .await
            .unwrap();

        assert!(cues.is_empty());
        assert!(page.view().error.is_some());
    }

    #[tokio::test]
    async fn scrolling_drives_the_top_button() {
        let dir = tempdir().unwrap();
        let mut page = page(dir.path());

        page.dispatch(PageEvent::Scrolled { offset: 350.0 }).await.unwrap();
        assert!(page.scroll_top_visible());

        page.dispatch(PageEvent::Scrolled { offset: 120.0 }).await.unwrap();
        assert!(!page.scroll_top_visible());

        let cues = page.dispatch(PageEvent::ScrollTopClicked).await.unwrap();
        assert_eq!(cues, vec![PageCue::Scroll(ScrollCue::ToTop)]);
    }

    #[tokio::test]
    async fn anchor_clicks_follow_the_registered_sections() {
        let dir = tempdir().unwrap();
        let mut page = page(dir.path());
        page.register_section("features");

        let root = page
            .dispatch(PageEvent::AnchorClicked { href: "#".into() })
            .await
            .unwrap();
        assert!(root.is_empty());

        let hit = page
            .dispatch(PageEvent::AnchorClicked {
                href: "#features".into(),
            })
            .await
            .unwrap();
        assert_eq!(
            hit,
            vec![
                PageCue::PreventDefault,
                PageCue::Scroll(ScrollCue::ToSection("features".into())),
            ]
        );

        let miss = page
            .dispatch(PageEvent::AnchorClicked {
                href: "#pricing".into(),
            })
            .await
            .unwrap();
        assert_eq!(miss, vec![PageCue::PreventDefault]);
    }

    #[tokio::test]
    async fn only_card_roles_are_observed() {
        let dir = tempdir().unwrap();
        let mut page = page(dir.path());

        page.observe_card("feature-1", "card");
        page.observe_card("benefit-1", "benefit-card");
        page.observe_card("hero", "hero-banner");
        assert_eq!(page.reveals().observed(), 2);

        page.dispatch(PageEvent::CardIntersection {
            id: "feature-1".into(),
            intersecting: true,
        })
        .await
        .unwrap();
        assert_eq!(
            page.reveals().state("feature-1"),
            Some(RevealState::Revealed)
        );
        assert_eq!(page.reveals().state("hero"), None);
    }

    #[tokio::test]
    async fn ticks_reach_the_error_notice() {
        let dir = tempdir().unwrap();
        let mut page = page(dir.path());

        page.dispatch(PageEvent::Submit {
            email: "bad".into(),
        })
        .await
        .unwrap();
        assert!(page.view().error.is_some());

        let now = Instant::now() + crate::view::ERROR_AUTOHIDE;
        page.dispatch(PageEvent::Tick { now }).await.unwrap();
        assert!(page.view().error.is_none());
    }
}
