//! Navbar and footer defaults, one entry per style.

use serde_json::{Value, json};

use crate::chrome::{ChromeStyle, FooterStyle, LinkLayout, NavbarStyle, pick_link_layout};
use crate::registry::DefaultDataMap;

fn link(text: &str, href: &str) -> Value {
    json!({ "text": text, "href": href })
}

fn primary_links() -> Vec<Value> {
    vec![
        link("Home", "/"),
        link("About", "/about"),
        link("Products", "/products"),
        link("Contact", "/contact"),
    ]
}

pub(in crate::registry) fn navbar() -> DefaultDataMap {
    NavbarStyle::ALL
        .into_iter()
        .fold(DefaultDataMap::new(NavbarStyle::Style1.key()), |map, style| {
            map.with(style.key(), navbar_style(style))
        })
}

fn navbar_style(style: NavbarStyle) -> Value {
    let mut data = json!({
        "logoText": "Your Brand",
        "logoUrl": "",
        "buttons": [
            { "text": "Get Started", "href": "/contact", "variant": "primary" }
        ],
        "showCart": style.number() % 3 == 0,
        "sticky": true,
        "backgroundColor": "#ffffff",
        "textColor": "#111827",
        "buttonColor": "#3b82f6",
    });

    let links = primary_links();
    match pick_link_layout(ChromeStyle::Navbar(style)) {
        LinkLayout::Flat => {
            data["links"] = Value::Array(links);
        }
        LinkLayout::Split => {
            let (left, right) = links.split_at(2);
            data["leftLinks"] = Value::Array(left.to_vec());
            data["rightLinks"] = Value::Array(right.to_vec());
        }
        LinkLayout::Sectioned => {
            data["sections"] = json!([{ "title": "Menu", "links": links }]);
        }
    }
    data
}

pub(in crate::registry) fn footer() -> DefaultDataMap {
    FooterStyle::ALL
        .into_iter()
        .fold(DefaultDataMap::new(FooterStyle::Style1.key()), |map, style| {
            map.with(style.key(), footer_style(style))
        })
}

fn footer_style(style: FooterStyle) -> Value {
    let mut data = json!({
        "companyName": "Your Company",
        "description": "Building quality products and lasting relationships with our customers.",
        "logoUrl": "",
        "socialLinks": [
            { "platform": "facebook", "href": "https://facebook.com" },
            { "platform": "instagram", "href": "https://instagram.com" },
            { "platform": "twitter", "href": "https://twitter.com" },
        ],
        "contact": {
            "email": "hello@example.com",
            "phone": "+1 (555) 123-4567",
            "address": "123 Main Street, Anytown",
        },
        "copyright": "© 2025 Your Company. All rights reserved.",
        "showNewsletter": style.number() >= 8,
        "backgroundColor": "#111827",
        "textColor": "#f9fafb",
    });

    match pick_link_layout(ChromeStyle::Footer(style)) {
        LinkLayout::Flat => {
            data["links"] = json!([
                link("About", "/about"),
                link("Contact", "/contact"),
                link("Privacy Policy", "/privacy-policy"),
                link("Terms of Service", "/terms"),
            ]);
        }
        LinkLayout::Sectioned => {
            data["sections"] = json!([
                {
                    "title": "Company",
                    "links": [link("About", "/about"), link("Blog", "/blog"), link("Careers", "/careers")]
                },
                {
                    "title": "Support",
                    "links": [link("Contact", "/contact"), link("FAQ", "/faq"), link("Privacy Policy", "/privacy-policy")]
                },
            ]);
        }
        LinkLayout::Split => {
            data["leftLinks"] = json!([link("About", "/about"), link("Contact", "/contact")]);
            data["rightLinks"] = json!([link("Privacy Policy", "/privacy-policy")]);
        }
    }
    data
}
