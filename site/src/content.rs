//! Roma Burger page content.
//!
//! All copy, contact data and coordinates are baked in here. Checked by
//! [`crate::validate::validate_content`] in the tests below and by
//! `roma check`.

use crate::anchors::{Anchor, ScrollTarget};
use crate::types::*;

/// Head-office phone, used by the header, both CTAs and the footer.
pub const HEAD_OFFICE_PHONE: &str = "+90 544 737 88 07";

/// Shared contact mailbox.
pub const CONTACT_EMAIL: &str = "romaburgerr@gmail.com";

const HEAD_OFFICE_ADDRESS: &str = "Bahçeyaka, 643. Sk. No:3, 07190 Döşemealtı/Antalya";

/// Navigation bar links, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Ana Sayfa",
        target: ScrollTarget::Top,
    },
    NavLink {
        label: "Ürünümüz",
        target: ScrollTarget::anchor(Anchor::Features),
    },
    NavLink {
        label: "Hizmet Alanları",
        target: ScrollTarget::anchor(Anchor::TargetAudience),
    },
    NavLink {
        label: "Bayilik",
        target: ScrollTarget::anchor(Anchor::Franchises),
    },
    NavLink {
        label: "İletişim",
        target: ScrollTarget::anchor(Anchor::Contact),
    },
];

/// "Why us" cards.
pub const FEATURES: &[FeatureItem] = &[
    FeatureItem {
        title: "Hazır & Pratik",
        description: "Tamamen hazırlanmış olarak gelir, sadece ısıtıp servis edersiniz.",
        icon: "🍔",
    },
    FeatureItem {
        title: "Donmuş Lojistik",
        description: "-18 derecede tazeliğini koruyan özel şoklama teknolojisi.",
        icon: "📦",
    },
    FeatureItem {
        title: "Standart Lezzet",
        description: "Her sevkiyatta değişmeyen, garantili sos ve köfte standardı.",
        icon: "✨",
    },
];

/// Target audience cards.
pub const AUDIENCES: &[AudienceItem] = &[
    AudienceItem {
        title: "Üniversite Kantinleri",
        icon: "🎓",
    },
    AudienceItem {
        title: "Okul Yemekhaneleri",
        icon: "🏫",
    },
    AudienceItem {
        title: "Restoran ve Kafeler",
        icon: "☕",
    },
    AudienceItem {
        title: "Kurumsal Yemek Firmaları",
        icon: "🏢",
    },
];

/// Franchise locations.
pub const FRANCHISES: &[FranchiseRecord] = &[
    FranchiseRecord {
        title: "ANTALYA ANA BAYİ",
        address: HEAD_OFFICE_ADDRESS,
        phone: HEAD_OFFICE_PHONE,
        email: CONTACT_EMAIL,
        coordinates: Coordinates::new(37.017, 30.605),
        map_label: "Antalya Ana Bayi",
    },
    FranchiseRecord {
        title: "ISPARTA & BURDUR BAYİSİ",
        address: "1006 sokak No: 43/B Kutlubey mah. Isparta Merkez",
        phone: "+90 535 501 59 90",
        email: CONTACT_EMAIL,
        coordinates: Coordinates::new(37.766, 30.556),
        map_label: "Isparta & Burdur Dağıtım",
    },
    FranchiseRecord {
        title: "DENİZLİ & MUĞLA BAYİSİ",
        address: "Atalar mahallesi 1342 sokak No: 7B Pamukkale/Denizli",
        phone: "+90 544 154 14 51",
        email: CONTACT_EMAIL,
        coordinates: Coordinates::new(37.783, 29.095),
        map_label: "Denizli & Muğla Dağıtım",
    },
];

/// Provinces served, in badge order.
pub const SERVICE_AREAS: &[ServiceArea] = &[
    ServiceArea("Antalya"),
    ServiceArea("Isparta"),
    ServiceArea("Burdur"),
    ServiceArea("Denizli"),
    ServiceArea("Muğla"),
];

/// Map viewport centered between the three locations.
pub const FRANCHISE_MAP: MapView = MapView {
    center: Coordinates::new(37.5, 30.4),
    zoom: 7,
};

/// The whole page.
pub const ROMA_BURGER: SiteContent = SiteContent {
    brand: Brand {
        name: "ROMA BURGER",
        tagline: "Damaklarda İz Bırakan Lezzet",
        copyright: "© 2024 Roma Burger - Tüm Hakları Saklıdır.",
    },
    page_title: "Roma Burger | Yeni Nesil Islak Burger Tedariği",
    page_description: "Üniversite kantinleri, yemekhaneler ve kafeler için donmuş, ısıtmaya hazır ıslak burger tedariği ve bayilik.",
    nav: NAV_LINKS,
    header_cta: NavLink {
        label: "İletişim",
        target: ScrollTarget::anchor(Anchor::Contact),
    },
    hero: HeroCopy {
        headline_top: "YENİ NESİL",
        headline_accent: "ISLAK BURGER",
        headline_bottom: "TEDARİĞİ",
        subcopy: "Üniversite kantinleri, yemekhaneler ve kafeler için pratik, donmuş ve ısıtmaya hazır efsane lezzet.",
        cta: NavLink {
            label: "Bayilik Başvurusu",
            target: ScrollTarget::anchor(Anchor::Contact),
        },
        visual: "🍔",
    },
    marquee_phrase: "TOPTAN SATIŞ • GÜNLÜK ÜRETİM • HİJYENİK TESİS • TAZE MALZEME • KALİTELİ HİZMET",
    features: FeatureSection {
        heading: Heading {
            lead: "Neden ",
            accent: "Roma Burger?",
        },
        items: FEATURES,
    },
    audience: AudienceSection {
        heading: Heading {
            lead: "Kimler İçin ",
            accent: "Uygunuz?",
        },
        items: AUDIENCES,
    },
    franchises: FranchiseSection {
        intro: "Roma Burger olarak, Antalya'daki ana bayimiz üzerinden yürüttüğümüz güçlü dağıtım ağımızla, Roma Burger'in benzersiz lezzetini Türkiye'nin dört bir yanına ulaştırıyoruz.",
        service_area_label: "Hizmet Verilen İller:",
        service_areas: SERVICE_AREAS,
        records: FRANCHISES,
        map: FRANCHISE_MAP,
        sub_dealer: CallToAction {
            heading: "Alt Bayilik Başvurusu",
            body: "Alt bayilik veya toptan talepleriniz için iletişime geçiniz:",
            phone: HEAD_OFFICE_PHONE,
        },
    },
    closing_cta: CallToAction {
        heading: "İşletmenize Lezzet Katın!",
        body: "Alt bayilik veya toptan alım talepleriniz için hemen görüşelim.",
        phone: HEAD_OFFICE_PHONE,
    },
    contact: ContactInfo {
        phone: HEAD_OFFICE_PHONE,
        email: CONTACT_EMAIL,
        address: HEAD_OFFICE_ADDRESS,
    },
    hours: OpeningHours {
        days: "Pazartesi - Cuma",
        hours: "09:00 - 18:00",
    },
};

impl SiteContent {
    /// The Roma Burger landing page content.
    pub const fn roma_burger() -> Self {
        ROMA_BURGER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_content;

    #[test]
    fn shipped_content_is_valid() {
        if let Err(err) = validate_content(&ROMA_BURGER) {
            panic!("content defects: {err:?}");
        }
    }

    #[test]
    fn every_nav_target_is_known() {
        for link in NAV_LINKS {
            assert!(link.target.is_known(), "{} -> {:?}", link.label, link.target);
        }
        assert!(ROMA_BURGER.hero.cta.target.is_known());
        assert!(ROMA_BURGER.header_cta.target.is_known());
    }

    #[test]
    fn service_areas_keep_display_order() {
        let labels: Vec<_> = SERVICE_AREAS.iter().map(ServiceArea::label).collect();
        assert_eq!(labels, ["Antalya", "Isparta", "Burdur", "Denizli", "Muğla"]);
    }

    #[test]
    fn scroll_actions_cover_brand_nav_and_ctas() {
        let actions = ROMA_BURGER.scroll_actions();
        assert_eq!(actions.len(), NAV_LINKS.len() + 3);
        assert_eq!(actions[0], ("ROMA BURGER", ScrollTarget::Top));
        assert_eq!(
            actions.last().copied(),
            Some(("Bayilik Başvurusu", ScrollTarget::Id("contact")))
        );
    }
}
