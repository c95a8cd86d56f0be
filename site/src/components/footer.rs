use leptos::prelude::*;

use crate::anchors::Anchor;
use crate::links::{derive_dial_uri, derive_mail_uri};
use crate::types::{Brand, ContactInfo, OpeningHours};

/// Contact footer; its id is the target of every "contact" scroll action.
#[component]
pub fn Footer(brand: Brand, contact: ContactInfo, hours: OpeningHours) -> impl IntoView {
    view! {
        <footer id=Anchor::Contact.id() class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{brand.name}</h3>
                        <p class="footer-tagline">{brand.tagline}</p>
                    </div>
                    <div>
                        <h4 class="footer-heading">"İletişim"</h4>
                        <a class="footer-link footer-phone" href=derive_dial_uri(contact.phone)>
                            {format!("📞 {}", contact.phone)}
                        </a>
                        <a class="footer-link footer-email" href=derive_mail_uri(contact.email)>
                            {format!("✉️ {}", contact.email)}
                        </a>
                        <p class="footer-muted">{format!("📍 {}", contact.address)}</p>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Çalışma Saatleri"</h4>
                        <p class="footer-muted">{hours.days}</p>
                        <p class="footer-muted">{hours.hours}</p>
                    </div>
                </div>
                <p class="footer-copyright">{brand.copyright}</p>
            </div>
        </footer>
    }
}
