//! Scroll anchors and the smooth-scroll action.
//!
//! Sections publish a stable `id`; the navigation bar and the hero button
//! consume it. Both sides go through [`Anchor`] so the identifiers cannot
//! drift apart. The DOM encoding of a target lives in a `data-scroll`
//! attribute and is parsed back at click time, which is why
//! [`ScrollTarget::Id`] carries an arbitrary string rather than an [`Anchor`].

use serde::Serialize;

/// Attribute value that stands for "scroll to the top of the document".
pub const TOP_SENTINEL: &str = "top";

/// Name of the attribute carrying a scroll target in the rendered markup.
pub const SCROLL_ATTR: &str = "data-scroll";

/// Sections that can be scrolled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// "Why us" feature grid
    Features,
    /// Audience grid
    TargetAudience,
    /// Franchise directory
    Franchises,
    /// Footer contact block
    Contact,
}

impl Anchor {
    /// All anchors in page order.
    pub const ALL: [Anchor; 4] = [
        Anchor::Features,
        Anchor::TargetAudience,
        Anchor::Franchises,
        Anchor::Contact,
    ];

    /// The element id used in the markup.
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Features => "features",
            Anchor::TargetAudience => "target-audience",
            Anchor::Franchises => "franchises",
            Anchor::Contact => "contact",
        }
    }

    /// Reverse lookup of [`Anchor::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|anchor| anchor.id() == id)
    }
}

/// Where a scroll action goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum ScrollTarget<'a> {
    /// Document top
    Top,
    /// First element with this id
    Id(&'a str),
}

impl<'a> ScrollTarget<'a> {
    /// Target for a known section.
    pub const fn anchor(anchor: Anchor) -> ScrollTarget<'static> {
        ScrollTarget::Id(anchor.id())
    }

    /// Decode the `data-scroll` attribute value.
    pub fn parse(value: &'a str) -> Self {
        let value = value.trim();
        if value == TOP_SENTINEL {
            ScrollTarget::Top
        } else {
            ScrollTarget::Id(value.trim_start_matches('#'))
        }
    }

    /// Encode for the `data-scroll` attribute.
    pub fn as_attr(&self) -> &'a str {
        match *self {
            ScrollTarget::Top => TOP_SENTINEL,
            ScrollTarget::Id(id) => id,
        }
    }

    /// `href` fallback so links still work without the runtime.
    pub fn href(&self) -> String {
        match self {
            ScrollTarget::Top => "#".to_string(),
            ScrollTarget::Id(id) => format!("#{id}"),
        }
    }

    /// Whether the target is the page top or one of the known sections.
    pub fn is_known(&self) -> bool {
        match self {
            ScrollTarget::Top => true,
            ScrollTarget::Id(id) => Anchor::from_id(id).is_some(),
        }
    }
}

/// What a scroll action ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Scrolled to the document top
    Top,
    /// Scrolled to the anchor element
    Element,
    /// Anchor not present; nothing happened
    Missing,
}

/// The scrollable surface as seen by a scroll action.
///
/// The browser runtime implements this over `window`/`document`; tests use an
/// in-memory page.
pub trait Viewport {
    /// Handle to a located anchor element
    type Element;

    /// Look up an element by id at call time.
    fn find_anchor(&self, id: &str) -> Option<Self::Element>;

    /// Smooth-scroll to the document top.
    fn scroll_to_top(&mut self);

    /// Smooth-scroll until `element` is in view.
    fn scroll_to_element(&mut self, element: &Self::Element);
}

/// Run a scroll action. A missing anchor is a silent no-op.
pub fn perform_scroll<V: Viewport>(viewport: &mut V, target: ScrollTarget<'_>) -> ScrollOutcome {
    match target {
        ScrollTarget::Top => {
            viewport.scroll_to_top();
            ScrollOutcome::Top
        }
        ScrollTarget::Id(id) => match viewport.find_anchor(id) {
            Some(element) => {
                viewport.scroll_to_element(&element);
                ScrollOutcome::Element
            }
            None => {
                tracing::debug!(id, "scroll target not found, ignoring");
                ScrollOutcome::Missing
            }
        },
    }
}

/// Result of cross-referencing one scroll action against rendered markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnchorCheck {
    /// Label of the action (link text)
    pub label: String,
    /// Encoded target
    pub target: String,
    /// Number of elements carrying the target id (always 1 for `top`)
    pub matches: usize,
}

impl AnchorCheck {
    /// Exactly one element answers the action.
    pub fn is_ok(&self) -> bool {
        self.matches == 1
    }
}

/// Count, for every action, how many elements in `html` carry its id.
pub fn cross_reference(actions: &[(&str, ScrollTarget<'_>)], html: &str) -> Vec<AnchorCheck> {
    actions
        .iter()
        .map(|(label, target)| {
            let matches = match target {
                ScrollTarget::Top => 1,
                ScrollTarget::Id(id) => html.matches(&format!(r#" id="{id}""#)).count(),
            };
            AnchorCheck {
                label: (*label).to_string(),
                target: target.as_attr().to_string(),
                matches,
            }
        })
        .collect()
}
