//! Defaults for sections that collect visitor input.

use serde_json::json;

use crate::registry::DefaultDataMap;

pub(in crate::registry) fn contact() -> DefaultDataMap {
    DefaultDataMap::new("contact-1")
        .with(
            "contact-1",
            json!({
                "title": "Get in Touch",
                "subtitle": "We usually reply within one business day.",
                "fields": [
                    { "name": "name", "label": "Name", "type": "text", "required": true },
                    { "name": "email", "label": "Email", "type": "email", "required": true },
                    { "name": "message", "label": "Message", "type": "textarea", "required": true }
                ],
                "submitText": "Send Message",
                "successMessage": "Thanks! We'll be in touch soon.",
                "backgroundColor": "#ffffff",
                "textColor": "#111827"
            }),
        )
        .with(
            "contact-2",
            json!({
                "title": "Contact Us",
                "subtitle": "",
                "fields": [
                    { "name": "name", "label": "Name", "type": "text", "required": true },
                    { "name": "email", "label": "Email", "type": "email", "required": true },
                    { "name": "phone", "label": "Phone", "type": "tel", "required": false },
                    { "name": "message", "label": "Message", "type": "textarea", "required": true }
                ],
                "submitText": "Submit",
                "successMessage": "Message sent.",
                "showMap": true,
                "address": "123 Main Street, Anytown",
                "email": "hello@example.com",
                "phone": "+1 (555) 123-4567",
                "backgroundColor": "#f9fafb",
                "textColor": "#111827"
            }),
        )
}

pub(in crate::registry) fn appointment() -> DefaultDataMap {
    DefaultDataMap::new("appointment-1").with(
        "appointment-1",
        json!({
            "title": "Book an Appointment",
            "subtitle": "Pick a time that works for you.",
            "services": ["Consultation", "Follow-up"],
            "slotMinutes": 30,
            "openingHours": { "start": "09:00", "end": "17:00" },
            "submitText": "Book Now",
            "successMessage": "Your appointment request has been received."
        }),
    )
}

pub(in crate::registry) fn newsletter() -> DefaultDataMap {
    DefaultDataMap::new("newsletter-1")
        .with(
            "newsletter-1",
            json!({
                "title": "Subscribe to our Newsletter",
                "description": "Get the latest updates and offers straight to your inbox.",
                "placeholder": "Enter your email",
                "buttonText": "Subscribe",
                "successMessage": "Thanks for subscribing!",
                "backgroundColor": "#eff6ff",
                "textColor": "#1e3a8a",
                "buttonColor": "#2563eb"
            }),
        )
        .with(
            "newsletter-2",
            json!({
                "title": "Stay in the loop",
                "description": "",
                "placeholder": "you@example.com",
                "buttonText": "Join",
                "successMessage": "You're on the list.",
                "imageUrl": "",
                "backgroundColor": "#111827",
                "textColor": "#ffffff",
                "buttonColor": "#f59e0b"
            }),
        )
}
