//! Hard-coded default content, one table per component type.

mod chrome;
mod commerce;
mod content;
mod engagement;
mod media;

use super::{ComponentType, DefaultDataMap};

/// Build the default table for a component type.
pub(super) fn table_for(component: ComponentType) -> DefaultDataMap {
    match component {
        ComponentType::Navbar => chrome::navbar(),
        ComponentType::Footer => chrome::footer(),
        ComponentType::Hero => content::hero(),
        ComponentType::About => content::about(),
        ComponentType::Blog => content::blog(),
        ComponentType::Products => commerce::products(),
        ComponentType::Category => commerce::category(),
        ComponentType::Subcategory => commerce::subcategory(),
        ComponentType::Contact => engagement::contact(),
        ComponentType::Appointment => engagement::appointment(),
        ComponentType::Team => content::team(),
        ComponentType::Testimonials => content::testimonials(),
        ComponentType::Portfolio => media::portfolio(),
        ComponentType::Faq => content::faq(),
        ComponentType::Cta => commerce::cta(),
        ComponentType::Gallery => media::gallery(),
        ComponentType::Newsletter => engagement::newsletter(),
        ComponentType::Banner => commerce::banner(),
        ComponentType::Services => content::services(),
        ComponentType::Videos => media::videos(),
        ComponentType::Policies => content::policies(),
        ComponentType::TextEditor => content::text_editor(),
        ComponentType::Pricing => commerce::pricing(),
        ComponentType::OurClients => content::our_clients(),
        ComponentType::Others => content::others(),
    }
}
