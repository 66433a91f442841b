//! Deterministic naming and contact details for roster entities.
//!
//! Identity strings are derived from the entity id; only the product
//! embedded in the display name is drawn from the RNG.

use crate::{rng::GeneratorRng, types::EntityId};

/// Default product catalogue of the market's vendors.
pub const DEFAULT_PRODUCTS: [&str; 8] = [
    "Sate Padang",
    "Paragede Jaguang",
    "Pisang Kapik",
    "Teh Talua",
    "Ayam Geprek",
    "Martabak",
    "Nasi Kapau",
    "Bubur Kampiun",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub owner:     String,
    pub address:   String,
    pub whatsapp:  String,
    pub instagram: String,
}

pub struct NameGenerator;

impl NameGenerator {
    /// Display name `UMKM_{id:02}_{product}` with a catalogue draw.
    pub fn business_name(rng: &mut GeneratorRng, id: EntityId, products: &[String]) -> String {
        format!("UMKM_{id:02}_{}", rng.pick(products))
    }

    pub fn contact_card(id: EntityId) -> ContactCard {
        ContactCard {
            owner:     format!("Pemilik_{id}"),
            address:   format!("Jl. Pasar Lama No.{id}"),
            whatsapp:  format!("0821-6789-{id:04}"),
            instagram: format!("@umkm_{id:02}"),
        }
    }

    pub fn default_products() -> Vec<String> {
        DEFAULT_PRODUCTS.iter().map(|p| p.to_string()).collect()
    }
}
