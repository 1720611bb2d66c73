//! Defaults for shop sections.

use serde_json::json;

use crate::registry::DefaultDataMap;

pub(in crate::registry) fn products() -> DefaultDataMap {
    DefaultDataMap::new("products-1")
        .with(
            "products-1",
            json!({
                "title": "Featured Products",
                "subtitle": "Hand-picked favourites from our catalog.",
                "productsPerPage": 8,
                "columns": 4,
                "showPrice": true,
                "showAddToCart": true,
                "sortBy": "newest"
            }),
        )
        .with(
            "products-2",
            json!({
                "title": "Shop All",
                "subtitle": "",
                "productsPerPage": 12,
                "columns": 3,
                "showPrice": true,
                "showAddToCart": true,
                "showFilters": true,
                "sortBy": "price-asc"
            }),
        )
}

pub(in crate::registry) fn category() -> DefaultDataMap {
    DefaultDataMap::new("category-1").with(
        "category-1",
        json!({
            "title": "Shop by Category",
            "subtitle": "",
            "categoriesToShow": 6,
            "showProductCount": true,
            "layout": "grid"
        }),
    )
}

pub(in crate::registry) fn subcategory() -> DefaultDataMap {
    DefaultDataMap::new("subcategory-1").with(
        "subcategory-1",
        json!({
            "title": "Browse Subcategories",
            "parentCategory": null,
            "subcategoriesToShow": 8,
            "layout": "chips"
        }),
    )
}

pub(in crate::registry) fn pricing() -> DefaultDataMap {
    let plans = json!([
        {
            "name": "Starter", "price": 9, "currency": "USD", "interval": "month",
            "features": ["1 website", "Basic analytics", "Email support"],
            "buttonText": "Choose Starter", "buttonHref": "/contact", "highlighted": false
        },
        {
            "name": "Business", "price": 29, "currency": "USD", "interval": "month",
            "features": ["5 websites", "Advanced analytics", "Priority support"],
            "buttonText": "Choose Business", "buttonHref": "/contact", "highlighted": true
        },
        {
            "name": "Enterprise", "price": 99, "currency": "USD", "interval": "month",
            "features": ["Unlimited websites", "Custom integrations", "Dedicated manager"],
            "buttonText": "Contact Sales", "buttonHref": "/contact", "highlighted": false
        }
    ]);
    DefaultDataMap::new("pricing-1")
        .with(
            "pricing-1",
            json!({ "title": "Simple Pricing", "subtitle": "No hidden fees.", "plans": plans.clone(), "showToggle": false }),
        )
        .with(
            "pricing-2",
            json!({ "title": "Plans", "subtitle": "Save 20% with yearly billing.", "plans": plans, "showToggle": true }),
        )
}

pub(in crate::registry) fn banner() -> DefaultDataMap {
    DefaultDataMap::new("banner-1")
        .with(
            "banner-1",
            json!({
                "title": "Free shipping on orders over $50",
                "buttonText": "Shop Now",
                "buttonHref": "/products",
                "backgroundColor": "#1d4ed8",
                "textColor": "#ffffff",
                "dismissible": true
            }),
        )
        .with(
            "banner-2",
            json!({
                "title": "Summer Sale",
                "subtitle": "Up to 50% off",
                "imageUrl": "",
                "buttonText": "See Deals",
                "buttonHref": "/products",
                "backgroundColor": "#fef3c7",
                "textColor": "#78350f",
                "dismissible": false
            }),
        )
}

pub(in crate::registry) fn cta() -> DefaultDataMap {
    DefaultDataMap::new("cta-1")
        .with(
            "cta-1",
            json!({
                "title": "Ready to get started?",
                "description": "Join thousands of happy customers today.",
                "buttons": [
                    { "text": "Get Started", "href": "/contact", "variant": "primary" }
                ],
                "backgroundColor": "#3b82f6",
                "textColor": "#ffffff"
            }),
        )
        .with(
            "cta-2",
            json!({
                "title": "Have a project in mind?",
                "description": "Tell us about it and we'll get back within a day.",
                "buttons": [
                    { "text": "Contact Us", "href": "/contact", "variant": "primary" },
                    { "text": "Call Us", "href": "tel:+15551234567", "variant": "secondary" }
                ],
                "imageUrl": "",
                "backgroundColor": "#f1f5f9",
                "textColor": "#0f172a"
            }),
        )
}
