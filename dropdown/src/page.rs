//! The page the dropdowns ship on.

use pagedom::{Document, Element};

/// Build the landing page: a header with the language dropdown, a hero
/// section, an FAQ entry with its own dropdown, and a footer.
pub fn sample_page() -> Element {
    Element::body()
        .id("page")
        .child(header())
        .child(hero())
        .child(faq())
        .child(footer())
}

/// [`sample_page`] wrapped in a document with no listeners.
pub fn sample_document() -> Document {
    Document::new(sample_page())
}

fn header() -> Element {
    Element::new("header").id("header").children([
        Element::link().id("logo").class("logo"),
        Element::div().id("nav-dropdown").class("dropdown").children([
            Element::button()
                .id("dropdown-btn")
                .class("dropdown-btn")
                .child(Element::text("Language")),
            Element::div()
                .id("dropdown")
                .class("dropdown-content")
                .children([
                    Element::link().id("lang-en").child(Element::text("English")),
                    Element::link().id("lang-es").child(Element::text("Español")),
                ]),
        ]),
        Element::link()
            .id("sign-in")
            .class("btn btn-primary")
            .child(Element::text("Sign In")),
    ])
}

fn hero() -> Element {
    Element::new("section").id("hero").class("hero").children([
        Element::new("h1")
            .id("hero-title")
            .child(Element::text("Unlimited movies, TV shows, and more.")),
        Element::new("p")
            .id("hero-subtitle")
            .child(Element::text("Watch anywhere. Cancel anytime.")),
    ])
}

fn faq() -> Element {
    Element::new("section").id("faq").class("faq").children([
        Element::new("h2")
            .id("faq-title")
            .child(Element::text("Frequently Asked Questions")),
        Element::div().id("faq-item").class("faq-dropdown").children([
            Element::button()
                .id("faq-dropdown-btn")
                .class("faq-dropdown-btn")
                .child(Element::text("What is this service?")),
            Element::div()
                .id("faq-dropdown")
                .class("faq-dropdown-content")
                .child(Element::new("p").id("faq-answer").child(Element::text(
                    "A streaming service with a wide variety of award-winning shows and movies.",
                ))),
        ]),
    ])
}

fn footer() -> Element {
    Element::new("footer").id("footer").children([
        Element::link().id("footer-help").child(Element::text("Help Center")),
        Element::link().id("footer-terms").child(Element::text("Terms of Use")),
    ])
}
