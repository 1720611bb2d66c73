//! Defaults for image and video sections.

use serde_json::json;

use crate::registry::DefaultDataMap;

pub(in crate::registry) fn portfolio() -> DefaultDataMap {
    let projects = json!([
        { "title": "Brand Refresh", "category": "Branding", "imageUrl": "", "href": "/portfolio/brand-refresh" },
        { "title": "Mobile App", "category": "Product", "imageUrl": "", "href": "/portfolio/mobile-app" },
        { "title": "Launch Campaign", "category": "Marketing", "imageUrl": "", "href": "/portfolio/launch-campaign" }
    ]);
    DefaultDataMap::new("portfolio-1")
        .with(
            "portfolio-1",
            json!({ "title": "Our Work", "subtitle": "Selected projects.", "projects": projects.clone(), "showFilters": true }),
        )
        .with(
            "portfolio-2",
            json!({ "title": "Portfolio", "subtitle": "", "projects": projects, "layout": "masonry" }),
        )
}

pub(in crate::registry) fn gallery() -> DefaultDataMap {
    let images = json!([
        { "url": "https://res.cloudinary.com/demo/image/upload/gallery-1.jpg", "alt": "Gallery image 1" },
        { "url": "https://res.cloudinary.com/demo/image/upload/gallery-2.jpg", "alt": "Gallery image 2" },
        { "url": "https://res.cloudinary.com/demo/image/upload/gallery-3.jpg", "alt": "Gallery image 3" },
        { "url": "https://res.cloudinary.com/demo/image/upload/gallery-4.jpg", "alt": "Gallery image 4" }
    ]);
    DefaultDataMap::new("gallery-1")
        .with(
            "gallery-1",
            json!({ "title": "Gallery", "images": images.clone(), "columns": 4, "lightbox": true }),
        )
        .with(
            "gallery-2",
            json!({ "title": "Moments", "images": images, "layout": "carousel", "autoplay": true }),
        )
}

pub(in crate::registry) fn videos() -> DefaultDataMap {
    DefaultDataMap::new("videos-1").with(
        "videos-1",
        json!({
            "title": "Watch Our Story",
            "videos": [
                { "title": "Introduction", "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ", "provider": "youtube" }
            ],
            "autoplay": false,
            "columns": 1
        }),
    )
}
