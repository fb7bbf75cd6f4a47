//! Shared test fixture: the authored six-artwork gallery catalog.

use atelier_catalog::{Artwork, Catalog};

pub fn artwork(id: &str, title: &str, year: i32, size: &str, labels: &[&str]) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: title.to_string(),
        year,
        medium: "Acrylic on canvas".to_string(),
        size: size.to_string(),
        categories: labels.iter().map(|l| l.to_string()).collect(),
        image: format!("/artworks/{}.jpg", id.trim_start_matches('w')),
    }
}

/// Six works, two categories in use, one work tagged with both, plus an
/// authored but unused `Signature` label.
pub fn gallery_catalog() -> Catalog {
    Catalog::new(
        vec![
            artwork("w1", "Work 1", 2024, "50×50 cm", &["Portrait"]),
            artwork("w2", "Work 2", 2024, "60×60 cm", &["Portrait"]),
            artwork("w3", "Work 3", 2024, "60×80 cm", &["Portrait"]),
            artwork("w4", "Work 4", 2023, "60×90 cm", &["Cubist/Abstract"]),
            artwork("w5", "Work 5", 2023, "50×80 cm", &["Cubist/Abstract"]),
            artwork("w6", "Work 6", 2024, "60×80 cm", &["Cubist/Abstract", "Portrait"]),
        ],
        vec![
            "All".to_string(),
            "Portrait".to_string(),
            "Cubist/Abstract".to_string(),
            "Signature".to_string(),
        ],
    )
    .expect("authored catalog is valid")
}
