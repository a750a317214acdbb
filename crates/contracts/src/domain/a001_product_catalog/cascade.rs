//! Dependent selector cascade
//!
//! Selecting a product type drives the size and color selectors and the
//! visibility of the size/color/quantity controls of a product row.

use super::aggregate::ProductType;

/// Options and visibility of the dependent controls for one selected type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeState {
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub size_visible: bool,
    pub color_visible: bool,
    pub quantity_visible: bool,
}

impl CascadeState {
    /// Recompute the dependent controls for the type with wire name `code`.
    /// An empty or unknown type yields empty option lists and hidden controls.
    pub fn for_type(code: &str) -> Self {
        match ProductType::from_code(code) {
            Some(t) => Self {
                sizes: t.sizes().iter().map(|s| s.to_string()).collect(),
                colors: t.colors().iter().map(|s| s.to_string()).collect(),
                size_visible: true,
                color_visible: t.has_colors(),
                quantity_visible: true,
            },
            None => Self::default(),
        }
    }

    /// The size to pre-select: the only option when there is exactly one
    pub fn default_size(&self) -> String {
        match self.sizes.as_slice() {
            [only] => only.clone(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_follow_catalog_order_for_every_type() {
        for t in ProductType::all() {
            let state = CascadeState::for_type(t.code());
            let expected: Vec<String> = t.sizes().iter().map(|s| s.to_string()).collect();
            assert_eq!(state.sizes, expected, "sizes of {}", t);
        }
    }

    #[test]
    fn test_color_visible_iff_colors_defined() {
        for t in ProductType::all() {
            let state = CascadeState::for_type(t.code());
            assert_eq!(state.color_visible, !t.colors().is_empty(), "color of {}", t);
            assert_eq!(state.color_visible, !state.colors.is_empty());
        }
    }

    #[test]
    fn test_espinillera_shows_both_selectors() {
        let state = CascadeState::for_type("espinillera");
        assert_eq!(state.sizes, vec!["", "CH", "MD", "LG"]);
        assert_eq!(state.colors, vec!["", "blanco", "azul", "negro"]);
        assert!(state.size_visible);
        assert!(state.color_visible);
        assert!(state.quantity_visible);
        assert_eq!(state.default_size(), "");
    }

    #[test]
    fn test_mica_hides_color() {
        let state = CascadeState::for_type("mica");
        assert_eq!(state.sizes, vec!["Unitalla"]);
        assert!(state.colors.is_empty());
        assert!(!state.color_visible);
        assert!(state.size_visible);
        assert_eq!(state.default_size(), "Unitalla");
    }

    #[test]
    fn test_unknown_or_empty_type() {
        for code in ["", "casco"] {
            let state = CascadeState::for_type(code);
            assert_eq!(state, CascadeState::default());
        }
    }
}
