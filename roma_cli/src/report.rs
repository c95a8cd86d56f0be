//! `roma check`: content validation plus the scroll-anchor cross-reference.

use std::process::ExitCode;

use anyhow::{Context, Result};
use roma_site::anchors::{cross_reference, AnchorCheck};
use roma_site::types::SiteContent;
use roma_site::validate::{collect_violations, Violation};
use roma_site::{render_page, PageOptions};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub ok: bool,
    pub violations: Vec<Violation>,
    pub anchors: Vec<AnchorCheck>,
}

impl CheckReport {
    pub fn for_content(content: &SiteContent) -> Self {
        let violations = collect_violations(content);
        let html = render_page(content, &PageOptions::default());
        let anchors = cross_reference(&content.scroll_actions(), &html);
        let ok = violations.is_empty() && anchors.iter().all(AnchorCheck::is_ok);
        CheckReport {
            ok,
            violations,
            anchors,
        }
    }

    fn print_text(&self) {
        println!("Scroll anchors:");
        for check in &self.anchors {
            let mark = if check.is_ok() { "ok " } else { "ERR" };
            println!(
                "  [{mark}] {:<20} -> {:<16} ({} match)",
                check.label, check.target, check.matches
            );
        }
        if self.violations.is_empty() {
            println!("Content: no violations");
        } else {
            println!("Content: {} violation(s)", self.violations.len());
            for violation in &self.violations {
                println!("  - {violation}");
            }
        }
        println!("{}", if self.ok { "OK" } else { "FAILED" });
    }
}

pub fn check(json: bool) -> Result<ExitCode> {
    let report = CheckReport::for_content(&SiteContent::roma_burger());
    info!(
        ok = report.ok,
        violations = report.violations.len(),
        anchors = report.anchors.len(),
        "content checked"
    );

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
    } else {
        report.print_text();
    }

    Ok(if report.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roma_site::anchors::ScrollTarget;
    use roma_site::content::ROMA_BURGER;
    use roma_site::types::NavLink;

    #[test]
    fn bundled_content_passes() {
        let report = CheckReport::for_content(&ROMA_BURGER);
        assert!(report.ok);
        assert!(report.violations.is_empty());
        assert_eq!(report.anchors.len(), ROMA_BURGER.scroll_actions().len());
    }

    #[test]
    fn typo_fails_both_checks() {
        const NAV: &[NavLink] = &[NavLink {
            label: "Ürün",
            target: ScrollTarget::Id("feature"),
        }];
        let mut content = ROMA_BURGER;
        content.nav = NAV;

        let report = CheckReport::for_content(&content);
        assert!(!report.ok);
        assert_eq!(report.violations.len(), 1);
        let broken: Vec<_> = report.anchors.iter().filter(|check| !check.is_ok()).collect();
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].target, "feature");
        assert_eq!(broken[0].matches, 0);
    }
}
