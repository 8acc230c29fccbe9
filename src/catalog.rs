//! The fixed course catalog.
//!
//! Courses are defined at compile time and never created or mutated at
//! runtime. Lookup is by name; an unknown name resolves to price 0 rather
//! than an error (callers only ever pick names from `CATALOG` itself).

/// A course on offer, with its tuition price in dollars.
pub struct Course {
    pub name: &'static str,
    pub price: f64,
}

/// Every course the system offers, in menu order.
pub const CATALOG: &[Course] = &[
    Course {
        name: "AI",
        price: 3000.0,
    },
    Course {
        name: "Web 3.0",
        price: 2000.0,
    },
    Course {
        name: "Metaverse",
        price: 2000.0,
    },
    Course {
        name: "Blockchain",
        price: 1500.0,
    },
];

/// Tuition price for a course name. Unknown names resolve to 0.
pub fn price_of(name: &str) -> f64 {
    CATALOG
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.price)
        .unwrap_or(0.0)
}

/// Course names in catalog order, for the selection prompt.
pub fn names() -> Vec<&'static str> {
    CATALOG.iter().map(|c| c.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_four_fixed_courses() {
        assert_eq!(names(), vec!["AI", "Web 3.0", "Metaverse", "Blockchain"]);
    }

    #[test]
    fn test_price_of_known_courses() {
        assert_eq!(price_of("AI"), 3000.0);
        assert_eq!(price_of("Web 3.0"), 2000.0);
        assert_eq!(price_of("Metaverse"), 2000.0);
        assert_eq!(price_of("Blockchain"), 1500.0);
    }

    #[test]
    fn test_price_of_unknown_course_is_zero() {
        assert_eq!(price_of("Quantum Computing"), 0.0);
        assert_eq!(price_of(""), 0.0);
    }
}
