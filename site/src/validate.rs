//! Content validation.
//!
//! The page data is static, so a bad coordinate or a malformed phone number
//! is a defect in the source, not a runtime condition. These checks run in
//! the test suite and in `roma check`/`roma build`, never while rendering.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::links::{is_dialable, is_valid_email};
use crate::types::{Coordinates, SiteContent};

/// One defect in the content.
#[derive(Clone, Debug, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Latitude or longitude outside the WGS84 range
    #[error("{owner}: coordinates ({lat}, {lng}) are out of range")]
    CoordinatesOutOfRange {
        /// Record title
        owner: String,
        /// Offending latitude
        lat: f64,
        /// Offending longitude
        lng: f64,
    },
    /// Phone number that does not reduce to a dial string
    #[error("{owner}: phone {phone:?} is not dialable")]
    UndialablePhone {
        /// Where the number appears
        owner: String,
        /// The display number
        phone: String,
    },
    /// Email address unusable in a `mailto:` link
    #[error("{owner}: email {email:?} is not a valid address")]
    InvalidEmail {
        /// Where the address appears
        owner: String,
        /// The address
        email: String,
    },
    /// Scroll action pointing at an id no section publishes
    #[error("link {label:?} targets unknown anchor {target:?}")]
    UnknownScrollTarget {
        /// Link text
        label: String,
        /// Encoded target
        target: String,
    },
    /// Service area listed twice
    #[error("service area {label:?} is listed more than once")]
    DuplicateServiceArea {
        /// Badge text
        label: String,
    },
    /// Blank text where a label is required
    #[error("{owner} has an empty label")]
    EmptyLabel {
        /// What kind of item is unlabelled
        owner: String,
    },
}

/// Returned when the content has defects.
#[derive(Debug, Error)]
pub enum ContentError {
    /// One or more violations were found
    #[error("content has {} violation(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<Violation>),
}

impl ContentError {
    /// The violations behind this error.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ContentError::Invalid(violations) => violations,
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate everything; `Ok` only when no violation is found.
pub fn validate_content(content: &SiteContent) -> Result<(), ContentError> {
    let violations = collect_violations(content);
    if violations.is_empty() {
        tracing::debug!("content validated");
        Ok(())
    } else {
        tracing::warn!(count = violations.len(), "content has defects");
        Err(ContentError::Invalid(violations))
    }
}

/// All violations, in a stable order (records, contact, links, badges).
pub fn collect_violations(content: &SiteContent) -> Vec<Violation> {
    let mut out = Vec::new();

    for record in content.franchises.records {
        let owner = record.title;
        if owner.trim().is_empty() {
            out.push(Violation::EmptyLabel { owner: "franchise record".into() });
        }
        check_coordinates(owner, &record.coordinates, &mut out);
        check_phone(owner, record.phone, &mut out);
        check_email(owner, record.email, &mut out);
    }

    check_coordinates("map center", &content.franchises.map.center, &mut out);
    check_phone("footer", content.contact.phone, &mut out);
    check_email("footer", content.contact.email, &mut out);
    check_phone(
        content.franchises.sub_dealer.heading,
        content.franchises.sub_dealer.phone,
        &mut out,
    );
    check_phone(content.closing_cta.heading, content.closing_cta.phone, &mut out);

    for (label, target) in content.scroll_actions() {
        if label.trim().is_empty() {
            out.push(Violation::EmptyLabel { owner: "navigation link".into() });
        }
        if !target.is_known() {
            out.push(Violation::UnknownScrollTarget {
                label: label.to_string(),
                target: target.as_attr().to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    for area in content.franchises.service_areas {
        if area.label().trim().is_empty() {
            out.push(Violation::EmptyLabel { owner: "service area".into() });
        } else if !seen.insert(area.label()) {
            out.push(Violation::DuplicateServiceArea {
                label: area.label().to_string(),
            });
        }
    }

    out
}

fn check_coordinates(owner: &str, coordinates: &Coordinates, out: &mut Vec<Violation>) {
    if !coordinates.is_valid() {
        out.push(Violation::CoordinatesOutOfRange {
            owner: owner.to_string(),
            lat: coordinates.lat,
            lng: coordinates.lng,
        });
    }
}

fn check_phone(owner: &str, phone: &str, out: &mut Vec<Violation>) {
    if !is_dialable(phone) {
        out.push(Violation::UndialablePhone {
            owner: owner.to_string(),
            phone: phone.to_string(),
        });
    }
}

fn check_email(owner: &str, email: &str, out: &mut Vec<Violation>) {
    if !is_valid_email(email) {
        out.push(Violation::InvalidEmail {
            owner: owner.to_string(),
            email: email.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::ScrollTarget;
    use crate::content::ROMA_BURGER;
    use crate::types::{FranchiseRecord, NavLink, ServiceArea};

    const BROKEN_RECORDS: &[FranchiseRecord] = &[
        FranchiseRecord {
            title: "KUTUP BAYİSİ",
            address: "Kuzey Kutbu",
            phone: "+90 5XX 000 00 00",
            email: "kutup@",
            coordinates: Coordinates::new(91.0, 30.0),
            map_label: "Kutup",
        },
        FranchiseRecord {
            title: "GECE BAYİSİ",
            address: "Bilinmiyor",
            phone: "+90 544 737 88 07",
            email: "gece@romaburger.com",
            coordinates: Coordinates::new(37.0, f64::NAN),
            map_label: "Gece",
        },
    ];

    const TYPO_NAV: &[NavLink] = &[NavLink {
        label: "Bayilik",
        target: ScrollTarget::Id("franchise"),
    }];

    const DUPLICATE_AREAS: &[ServiceArea] = &[
        ServiceArea("Antalya"),
        ServiceArea("Burdur"),
        ServiceArea("Antalya"),
        ServiceArea(" "),
    ];

    #[test]
    fn reports_every_record_defect() {
        let mut content = ROMA_BURGER;
        content.franchises.records = BROKEN_RECORDS;

        let err = validate_content(&content).unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 4);
        assert!(matches!(
            &violations[0],
            Violation::CoordinatesOutOfRange { owner, lat, .. } if owner == "KUTUP BAYİSİ" && *lat == 91.0
        ));
        assert!(matches!(&violations[1], Violation::UndialablePhone { .. }));
        assert!(matches!(&violations[2], Violation::InvalidEmail { .. }));
        assert!(matches!(
            &violations[3],
            Violation::CoordinatesOutOfRange { owner, .. } if owner == "GECE BAYİSİ"
        ));
    }

    #[test]
    fn flags_unknown_scroll_target() {
        let mut content = ROMA_BURGER;
        content.nav = TYPO_NAV;

        let violations = collect_violations(&content);
        assert_eq!(
            violations,
            vec![Violation::UnknownScrollTarget {
                label: "Bayilik".into(),
                target: "franchise".into(),
            }]
        );
    }

    #[test]
    fn flags_duplicate_and_blank_badges() {
        let mut content = ROMA_BURGER;
        content.franchises.service_areas = DUPLICATE_AREAS;

        let violations = collect_violations(&content);
        assert_eq!(
            violations,
            vec![
                Violation::DuplicateServiceArea {
                    label: "Antalya".into()
                },
                Violation::EmptyLabel { owner: "service area".into() },
            ]
        );
    }

    #[test]
    fn error_message_lists_violations() {
        let err = ContentError::Invalid(vec![Violation::DuplicateServiceArea {
            label: "Burdur".into(),
        }]);
        assert_eq!(
            err.to_string(),
            "content has 1 violation(s): service area \"Burdur\" is listed more than once"
        );
    }
}
