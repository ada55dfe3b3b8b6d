//! Product Draft
//!
//! Local edit buffer for the product editor. The draft is a full copy of a
//! product's fields, owned by the editor while it is mounted and replaced
//! wholesale whenever the external product changes.

use crate::models::Product;

/// Editable draft fields (everything except `id` and `image`, which have
/// their own paths).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Price,
    Category,
}

/// Working copy of a product during editing.
///
/// `price` is raw user text and may be non-numeric; this layer does no
/// coercion or validation. The submit-callback receiver decides what to do
/// with an unparsable price (see [`ProductDraft::price_value`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: String,
}

impl ProductDraft {
    /// Full field copy of a product. Replaces any prior draft state.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }

    /// Update exactly one field, leaving all others untouched.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Price => self.price = value,
            DraftField::Category => self.category = value,
        }
    }

    /// Replace the draft's image with a freshly encoded one.
    pub fn set_image(&mut self, encoded: String) {
        self.image = encoded;
    }

    /// Parse the price text. `None` for non-numeric or negative input; the
    /// caller owns the policy for rejecting it.
    pub fn price_value(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| *price >= 0.0 && price.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u32) -> Product {
        Product {
            id,
            name: "Classic Tee".to_string(),
            price: 499.0,
            category: "Apparel".to_string(),
            image: "aGVsbG8=".to_string(),
        }
    }

    #[test]
    fn test_resync_replaces_draft_wholesale() {
        let mut draft = ProductDraft::from_product(&make_product(1));
        draft.set_field(DraftField::Name, "Edited".to_string());
        draft.set_field(DraftField::Price, "not a number".to_string());
        draft.set_image("data:image/png;base64,AAAA".to_string());

        let replacement = Product {
            id: 2,
            name: "Mug".to_string(),
            price: 19.99,
            category: "Kitchen".to_string(),
            image: "d29ybGQ=".to_string(),
        };
        draft = ProductDraft::from_product(&replacement);

        assert_eq!(draft, ProductDraft {
            id: 2,
            name: "Mug".to_string(),
            price: "19.99".to_string(),
            category: "Kitchen".to_string(),
            image: "d29ybGQ=".to_string(),
        });
    }

    #[test]
    fn test_field_edits_are_isolated() {
        let original = ProductDraft::from_product(&make_product(1));

        let mut draft = original.clone();
        draft.set_field(DraftField::Name, "Edited".to_string());
        assert_eq!(draft.price, original.price);
        assert_eq!(draft.category, original.category);
        assert_eq!(draft.image, original.image);
        assert_eq!(draft.id, original.id);

        let mut draft = original.clone();
        draft.set_field(DraftField::Price, "0".to_string());
        assert_eq!(draft.name, original.name);
        assert_eq!(draft.category, original.category);
        assert_eq!(draft.image, original.image);

        let mut draft = original.clone();
        draft.set_field(DraftField::Category, "Sale".to_string());
        assert_eq!(draft.name, original.name);
        assert_eq!(draft.price, original.price);
        assert_eq!(draft.image, original.image);
    }

    #[test]
    fn test_set_image_touches_only_image() {
        let original = ProductDraft::from_product(&make_product(1));
        let mut draft = original.clone();

        draft.set_image("data:image/png;base64,AAAA".to_string());

        assert_eq!(draft.image, "data:image/png;base64,AAAA");
        assert_eq!(draft.id, original.id);
        assert_eq!(draft.name, original.name);
        assert_eq!(draft.price, original.price);
        assert_eq!(draft.category, original.category);
    }

    #[test]
    fn test_submitted_draft_carries_all_fields() {
        let mut draft = ProductDraft::from_product(&make_product(7));
        draft.set_field(DraftField::Name, "Widget".to_string());
        draft.set_field(DraftField::Price, "19.99".to_string());

        assert_eq!(draft, ProductDraft {
            id: 7,
            name: "Widget".to_string(),
            price: "19.99".to_string(),
            category: "Apparel".to_string(),
            image: "aGVsbG8=".to_string(),
        });
    }

    #[test]
    fn test_price_value_parses_valid_text() {
        let mut draft = ProductDraft::from_product(&make_product(1));
        draft.set_field(DraftField::Price, " 19.99 ".to_string());
        assert_eq!(draft.price_value(), Some(19.99));
    }

    #[test]
    fn test_price_value_rejects_bad_input() {
        let mut draft = ProductDraft::from_product(&make_product(1));

        draft.set_field(DraftField::Price, "abc".to_string());
        assert_eq!(draft.price_value(), None);

        draft.set_field(DraftField::Price, "-5".to_string());
        assert_eq!(draft.price_value(), None);

        draft.set_field(DraftField::Price, "".to_string());
        assert_eq!(draft.price_value(), None);
    }
}
