//! Defaults for text-driven sections.

use serde_json::json;

use crate::registry::DefaultDataMap;

pub(in crate::registry) fn hero() -> DefaultDataMap {
    DefaultDataMap::new("hero-1")
        .with(
            "hero-1",
            json!({
                "title": "Welcome to Our Store",
                "subtitle": "Discover quality products crafted for everyday life.",
                "buttons": [
                    { "text": "Shop Now", "href": "/products", "variant": "primary" },
                    { "text": "Learn More", "href": "/about", "variant": "secondary" }
                ],
                "backgroundType": "color",
                "backgroundColor": "#0f172a",
                "textColor": "#ffffff",
                "imageUrl": "",
                "alignment": "center"
            }),
        )
        .with(
            "hero-2",
            json!({
                "title": "Build Something Great",
                "subtitle": "Everything you need to launch and grow your business online.",
                "buttons": [
                    { "text": "Get Started", "href": "/contact", "variant": "primary" }
                ],
                "backgroundType": "image",
                "backgroundColor": "#ffffff",
                "textColor": "#111827",
                "imageUrl": "https://res.cloudinary.com/demo/image/upload/hero-2.jpg",
                "imageAlignment": "right"
            }),
        )
        .with(
            "hero-3",
            json!({
                "title": "New Season Collection",
                "subtitle": "Up to 40% off selected items this week only.",
                "buttons": [
                    { "text": "View Collection", "href": "/products", "variant": "primary" }
                ],
                "backgroundType": "slider",
                "slides": [
                    { "imageUrl": "https://res.cloudinary.com/demo/image/upload/slide-1.jpg", "caption": "Spring" },
                    { "imageUrl": "https://res.cloudinary.com/demo/image/upload/slide-2.jpg", "caption": "Summer" }
                ],
                "backgroundColor": "#f8fafc",
                "textColor": "#0f172a",
                "autoplay": true,
                "interval": 5000
            }),
        )
}

pub(in crate::registry) fn about() -> DefaultDataMap {
    DefaultDataMap::new("about-1")
        .with(
            "about-1",
            json!({
                "title": "About Us",
                "subtitle": "Our story",
                "description": "We started with a simple idea: make great products accessible to everyone.",
                "imageUrl": "",
                "stats": [
                    { "label": "Happy Customers", "value": "10k+" },
                    { "label": "Years in Business", "value": "8" },
                    { "label": "Products", "value": "250+" }
                ],
                "backgroundColor": "#ffffff",
                "textColor": "#111827"
            }),
        )
        .with(
            "about-2",
            json!({
                "title": "Who We Are",
                "description": "A small team obsessed with quality and service.",
                "mission": "To deliver value in every interaction.",
                "vision": "A world where small businesses thrive online.",
                "imageUrl": "",
                "backgroundColor": "#f9fafb",
                "textColor": "#111827"
            }),
        )
}

pub(in crate::registry) fn blog() -> DefaultDataMap {
    DefaultDataMap::new("blog-1")
        .with(
            "blog-1",
            json!({
                "title": "Latest Posts",
                "subtitle": "News, guides and stories from our team.",
                "postsPerPage": 6,
                "showAuthor": true,
                "showDate": true,
                "layout": "grid"
            }),
        )
        .with(
            "blog-2",
            json!({
                "title": "From the Blog",
                "subtitle": "",
                "postsPerPage": 3,
                "showAuthor": false,
                "showDate": true,
                "layout": "list"
            }),
        )
}

pub(in crate::registry) fn team() -> DefaultDataMap {
    let members = json!([
        { "name": "Alex Morgan", "role": "Founder & CEO", "photoUrl": "", "bio": "" },
        { "name": "Sam Lee", "role": "Head of Design", "photoUrl": "", "bio": "" },
        { "name": "Jordan Diaz", "role": "Lead Engineer", "photoUrl": "", "bio": "" }
    ]);
    DefaultDataMap::new("team-1")
        .with(
            "team-1",
            json!({
                "title": "Meet Our Team",
                "subtitle": "The people behind the work.",
                "members": members.clone(),
                "columns": 3
            }),
        )
        .with(
            "team-2",
            json!({
                "title": "Our Experts",
                "subtitle": "",
                "members": members,
                "columns": 4,
                "showSocial": true
            }),
        )
}

pub(in crate::registry) fn testimonials() -> DefaultDataMap {
    let items = json!([
        { "name": "Priya S.", "role": "Customer", "quote": "Fantastic quality and fast shipping.", "rating": 5, "avatarUrl": "" },
        { "name": "Daniel K.", "role": "Customer", "quote": "Support went above and beyond.", "rating": 5, "avatarUrl": "" },
        { "name": "Mia R.", "role": "Customer", "quote": "I keep coming back for more.", "rating": 4, "avatarUrl": "" }
    ]);
    DefaultDataMap::new("testimonials-1")
        .with(
            "testimonials-1",
            json!({ "title": "What Our Customers Say", "testimonials": items.clone(), "layout": "grid" }),
        )
        .with(
            "testimonials-2",
            json!({ "title": "Testimonials", "testimonials": items, "layout": "carousel", "autoplay": true }),
        )
}

pub(in crate::registry) fn faq() -> DefaultDataMap {
    let items = json!([
        { "question": "How long does shipping take?", "answer": "Orders usually arrive within 3-5 business days." },
        { "question": "What is your return policy?", "answer": "Unused items can be returned within 30 days." },
        { "question": "Do you ship internationally?", "answer": "Yes, we ship to most countries." }
    ]);
    DefaultDataMap::new("faq-1")
        .with(
            "faq-1",
            json!({ "title": "Frequently Asked Questions", "subtitle": "", "items": items.clone(), "layout": "accordion" }),
        )
        .with(
            "faq-2",
            json!({ "title": "Questions?", "subtitle": "We have answers.", "items": items, "layout": "two-column" }),
        )
}

pub(in crate::registry) fn services() -> DefaultDataMap {
    let items = json!([
        { "title": "Consulting", "description": "Expert advice tailored to your goals.", "icon": "briefcase" },
        { "title": "Design", "description": "Beautiful, functional design for every screen.", "icon": "palette" },
        { "title": "Support", "description": "Friendly help whenever you need it.", "icon": "headset" }
    ]);
    DefaultDataMap::new("services-1")
        .with(
            "services-1",
            json!({ "title": "Our Services", "subtitle": "What we do best.", "services": items.clone(), "columns": 3 }),
        )
        .with(
            "services-2",
            json!({ "title": "Services", "subtitle": "", "services": items, "columns": 2, "showIcons": false }),
        )
}

pub(in crate::registry) fn policies() -> DefaultDataMap {
    DefaultDataMap::new("policies-1").with(
        "policies-1",
        json!({
            "title": "Our Policies",
            "policies": [
                { "title": "Privacy Policy", "slug": "privacy-policy", "content": "<p>Your privacy matters to us.</p>" },
                { "title": "Terms of Service", "slug": "terms", "content": "<p>By using this site you agree to our terms.</p>" },
                { "title": "Refund Policy", "slug": "refund-policy", "content": "<p>Refunds are issued within 14 days.</p>" }
            ]
        }),
    )
}

pub(in crate::registry) fn text_editor() -> DefaultDataMap {
    DefaultDataMap::new("text-editor-1").with(
        "text-editor-1",
        json!({
            "content": "<h2>Start writing</h2><p>Use the editor to add your own content.</p>",
            "maxWidth": "prose",
            "alignment": "left"
        }),
    )
}

pub(in crate::registry) fn our_clients() -> DefaultDataMap {
    DefaultDataMap::new("our-clients-1").with(
        "our-clients-1",
        json!({
            "title": "Trusted By",
            "subtitle": "Brands that work with us.",
            "clients": [
                { "name": "Northwind", "logoUrl": "", "website": "https://example.com" },
                { "name": "Contoso", "logoUrl": "", "website": "https://example.com" },
                { "name": "Fabrikam", "logoUrl": "", "website": "https://example.com" }
            ],
            "grayscale": true
        }),
    )
}

pub(in crate::registry) fn others() -> DefaultDataMap {
    DefaultDataMap::new("others-1").with(
        "others-1",
        json!({
            "title": "Custom Section",
            "description": "Use this block for anything the other sections don't cover.",
            "html": "",
            "backgroundColor": "#ffffff",
            "textColor": "#111827"
        }),
    )
}
