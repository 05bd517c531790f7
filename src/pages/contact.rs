//! Contact Page

use leptos::prelude::*;

use super::public::{BackLink, Brand, Footer};

pub const EMAIL: &str = "bytewave25@gmail.com";
pub const PHONES: [&str; 2] = ["+254-706-312-266", "+254-113-480-651"];

const SERVICES: [&str; 5] = [
    "CCTV Installation & Maintenance",
    "Computer Supply & Management",
    "Custom POS Systems (Hotel, School Management, etc.)",
    "IT Support & Consultation",
    "Enterprise Management Solutions",
];

/// `tel:` URI for a display-formatted number.
fn tel_href(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{digits}")
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="public-page">
            <header class="public-header">
                <Brand />
                <BackLink />
            </header>

            <main class="public-main narrow">
                <h1 class="page-title centered">"Get in Touch"</h1>
                <p class="hero-lead text-muted-foreground centered">
                    "Have a question or need our services? We're here to help."
                </p>

                <div class="card contact-card">
                    <h2 class="card-title">"✉ Email"</h2>
                    <p class="card-description">"Send us an email anytime"</p>
                    <a class="contact-link" href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                </div>

                <div class="card contact-card">
                    <h2 class="card-title">"☎ Phone Numbers"</h2>
                    <p class="card-description">"Call us during business hours"</p>
                    {PHONES
                        .iter()
                        .map(|&number| view! { <a class="contact-link block" href=tel_href(number)>{number}</a> })
                        .collect_view()}
                </div>

                <div class="card services-card">
                    <h2 class="section-title">"Our Services"</h2>
                    <ul class="services-list text-muted-foreground">
                        {SERVICES.iter().map(|&s| view! { <li>"• " {s}</li> }).collect_view()}
                    </ul>
                </div>
            </main>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_separators() {
        assert_eq!(tel_href(PHONES[0]), "tel:+254706312266");
        assert_eq!(tel_href(PHONES[1]), "tel:+254113480651");
    }
}
